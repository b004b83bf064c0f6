//! Full-pass text validation: the rebuild driver.
//!
//! [`TextValidator`] replays "existing text with an insertion applied at the
//! caret" through the active validation mode and produces corrected text plus
//! the new caret position. The pass is a single strict fold: the inserted
//! characters stream through first, then the remainder of the existing text
//! from the original caret onward, each decided against only the output
//! accepted so far.

use crate::validate::{
    CharContext, CharacterValidator, LineType, ValidationMode, mode,
};

/// Result of one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidatedText {
    /// Corrected text.
    pub text: String,
    /// Caret position after the insertion, in characters.
    pub caret: usize,
}

/// Orchestrates revalidation passes for one text field.
///
/// Stateless between calls; the growing result buffer and advancing caret
/// exist only for the duration of one [`validate`](Self::validate) call, so
/// identical inputs always produce identical output.
///
/// # Examples
///
/// ```
/// use oskbridge::{LineType, TextValidator, ValidationMode};
///
/// let validator = TextValidator::new(ValidationMode::Integer, LineType::SingleLine);
///
/// let result = validator.validate("", "-12", 0, None);
/// assert_eq!(result.text, "-12");
/// assert_eq!(result.caret, 3);
///
/// // A dash after the first position is silently dropped.
/// let result = validator.validate("5", "-", 1, None);
/// assert_eq!(result.text, "5");
/// assert_eq!(result.caret, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextValidator {
    mode: ValidationMode,
    line_type: LineType,
    custom: Option<CharacterValidator>,
}

impl TextValidator {
    /// Create a validator for the given mode and line handling.
    #[must_use]
    pub fn new(mode: ValidationMode, line_type: LineType) -> Self {
        Self {
            mode,
            line_type,
            custom: None,
        }
    }

    /// Create a validator carrying a custom per-character policy, used when
    /// the mode is [`ValidationMode::Custom`].
    #[must_use]
    pub fn with_custom(
        mode: ValidationMode,
        line_type: LineType,
        custom: CharacterValidator,
    ) -> Self {
        Self {
            mode,
            line_type,
            custom: Some(custom),
        }
    }

    /// The active validation mode.
    #[must_use]
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// The active line handling.
    #[must_use]
    pub fn line_type(&self) -> LineType {
        self.line_type
    }

    /// The configured custom policy, if any.
    #[must_use]
    pub fn custom(&self) -> Option<&CharacterValidator> {
        self.custom.as_ref()
    }

    /// Replace the active validation mode.
    pub fn set_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }

    /// Replace the active line handling.
    pub fn set_line_type(&mut self, line_type: LineType) {
        self.line_type = line_type;
    }

    /// Replace the custom policy.
    pub fn set_custom(&mut self, custom: Option<CharacterValidator>) {
        self.custom = custom;
    }

    /// Validate `insertion` applied to `text` at `caret`.
    ///
    /// The pre-caret prefix of `text` is taken as-is; the inserted characters
    /// are validated against it with the caret advancing per accepted
    /// character; the post-caret remainder of `text` is then revalidated
    /// against the growing output without advancing the caret further.
    /// Rejected characters are dropped silently — the caller sees only the
    /// shorter (or rewritten) result.
    ///
    /// `caret` and `selection_start` are character indices; a caret past the
    /// end of `text` is clamped.
    #[must_use]
    pub fn validate(
        &self,
        text: &str,
        insertion: &str,
        caret: usize,
        selection_start: Option<usize>,
    ) -> ValidatedText {
        let existing: Vec<char> = text.chars().collect();
        let caret = caret.min(existing.len());

        let mut accepted: Vec<char> = Vec::with_capacity(existing.len() + insertion.len());
        accepted.extend_from_slice(&existing[..caret]);
        let mut out_caret = caret;

        for ch in insertion.chars() {
            let decided = self.validate_char(
                ch,
                &CharContext {
                    accepted: &accepted,
                    pos: accepted.len(),
                    caret: out_caret,
                    selection_start,
                },
            );
            if let Some(ch) = decided {
                accepted.push(ch);
                out_caret += 1;
            }
        }

        for &ch in &existing[caret..] {
            let decided = self.validate_char(
                ch,
                &CharContext {
                    accepted: &accepted,
                    pos: accepted.len(),
                    caret: out_caret,
                    selection_start,
                },
            );
            if let Some(ch) = decided {
                accepted.push(ch);
            }
        }

        ValidatedText {
            text: accepted.into_iter().collect(),
            caret: out_caret,
        }
    }

    /// Classify a single character. `None` rejects it.
    ///
    /// Line breaks are stripped before mode dispatch — for every mode,
    /// including [`ValidationMode::None`] — unless the field is
    /// [`LineType::MultiLineNewline`]. [`ValidationMode::Custom`] without a
    /// configured policy is a passthrough.
    #[must_use]
    pub fn validate_char(&self, ch: char, ctx: &CharContext<'_>) -> Option<char> {
        if self.line_type != LineType::MultiLineNewline && (ch == '\r' || ch == '\n') {
            return None;
        }

        match self.mode {
            ValidationMode::None => Some(ch),
            ValidationMode::Custom => match &self.custom {
                Some(custom) => custom.validate(ch, ctx),
                None => Some(ch),
            },
            ValidationMode::Integer | ValidationMode::Decimal | ValidationMode::DecimalForcePoint => {
                mode::accept_numeric(self.mode, ch, ctx)
            }
            ValidationMode::Alphanumeric => mode::accept_alphanumeric(ch),
            ValidationMode::Name => mode::accept_name(ch, ctx),
            ValidationMode::EmailAddress => mode::accept_email(ch, ctx),
            ValidationMode::IpAddress => mode::accept_ip(ch, ctx),
            ValidationMode::Sentence => mode::accept_sentence(ch, ctx),
        }
    }
}
