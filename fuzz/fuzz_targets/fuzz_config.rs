//! Fuzz target for configuration parsing.
//!
//! Tests that arbitrary configuration documents (and nested custom-validator
//! documents) either parse or fail with a structured error — never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use oskbridge::{CharacterValidator, KeyboardConfig, KeyboardSession};

fuzz_target!(|data: &str| {
    let _ = KeyboardConfig::from_json(data);
    let _ = CharacterValidator::from_json(data);

    // The session survives malformed documents by falling back to disabled
    // validation.
    let mut session = KeyboardSession::new();
    let _ = session.configure(data);
    let state = session.insert_text("abc");
    assert!(state.selection_start <= state.text.chars().count());
});
