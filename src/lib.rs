//! `oskbridge` - engine-side core for an on-screen keyboard bridge.
//!
//! A game engine hosting a virtual text field feeds every edit through this
//! crate before it reaches the application: a rule-driven character
//! classifier decides, per keystroke and per existing character, whether a
//! character is allowed, rewritten, or rejected. Built-in modes cover
//! integers, decimals, alphanumeric fields, personal names, email and IP
//! addresses, and sentence casing; a configurable rule engine covers
//! everything else.
//!
//! The platform glue — showing and hiding the keyboard, focus, IME events,
//! autofill — lives outside this crate and talks to it through a narrow
//! contract: queued text-edit requests ([`KeyboardSession`]) and validation
//! passes ([`TextValidator`]) that take text buffers and return a corrected
//! buffer plus caret position.
//!
//! # Examples
//!
//! ```
//! use oskbridge::{LineType, TextValidator, ValidationMode};
//!
//! let validator = TextValidator::new(ValidationMode::Decimal, LineType::SingleLine);
//! let result = validator.validate("1.5", ".", 3, None);
//!
//! // The second separator is rejected; the caret stays put.
//! assert_eq!(result.text, "1.5");
//! assert_eq!(result.caret, 3);
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // ValidationMode in validate, etc.
#![allow(clippy::cast_possible_wrap)] // Positions fit comfortably in i64
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Annotated where it matters

pub mod config;
pub mod error;
pub mod queue;
pub mod session;
pub mod validate;

// Re-export core types at crate root
pub use config::{
    AutocapitalizationType, AutofillType, KeyboardConfig, KeyboardType, ReturnKeyType,
};
pub use error::{Error, OrdinalError, Result};
pub use queue::{Stamped, UpdateQueue};
pub use session::{FieldState, KeyboardSession, SessionHandle, TextEditRequest};
pub use validate::{
    CharContext, CharacterAction, CharacterRule, CharacterValidator, Condition, ConditionOperator,
    LineType, TextValidator, ValidatedText, ValidationMode,
};
