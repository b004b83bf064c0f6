//! Built-in validation modes.
//!
//! Each mode is a pure acceptance function of the candidate character, the
//! accepted output, and the edit positions. Returning `None` rejects the
//! character; returning a different character rewrites it.

use serde::{Deserialize, Serialize};

use crate::error::OrdinalError;
use crate::validate::{CharContext, downcase_single, upcase_single};

/// Special characters permitted in the local part of an email address.
const EMAIL_SPECIAL_CHARACTERS: &str = "!#$%&'*+-/=?^_`{|}~";

/// The active character-acceptance algorithm for a text field.
///
/// Set once per keyboard-show configuration; immutable during a validation
/// pass. Ordinals are part of the configuration wire format and must not be
/// reordered or renumbered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ValidationMode {
    /// Every character passes through untouched.
    #[default]
    None,
    /// Digits, with a leading dash for negative values.
    Integer,
    /// Digits, leading dash, and a single `.` or `,` separator.
    Decimal,
    /// ASCII letters and digits only.
    Alphanumeric,
    /// Personal names: case-corrected letters, single spaces, at most one
    /// apostrophe. Best effort — see [`accept_name`].
    Name,
    /// Email addresses.
    EmailAddress,
    /// Dotted-quad IP addresses (digit counting only, no value range check).
    IpAddress,
    /// Sentences: upcase the first letter and letters following `". "`.
    Sentence,
    /// Delegate to the configured [`CharacterValidator`].
    ///
    /// [`CharacterValidator`]: crate::validate::CharacterValidator
    Custom,
    /// Like [`Self::Decimal`], but only `.` is kept and `,` is rewritten
    /// to `.`.
    DecimalForcePoint,
}

impl TryFrom<u8> for ValidationMode {
    type Error = OrdinalError;

    fn try_from(value: u8) -> Result<Self, OrdinalError> {
        Ok(match value {
            0 => Self::None,
            1 => Self::Integer,
            2 => Self::Decimal,
            3 => Self::Alphanumeric,
            4 => Self::Name,
            5 => Self::EmailAddress,
            6 => Self::IpAddress,
            7 => Self::Sentence,
            8 => Self::Custom,
            9 => Self::DecimalForcePoint,
            _ => {
                return Err(OrdinalError {
                    name: "ValidationMode",
                    value,
                });
            }
        })
    }
}

impl From<ValidationMode> for u8 {
    fn from(mode: ValidationMode) -> Self {
        match mode {
            ValidationMode::None => 0,
            ValidationMode::Integer => 1,
            ValidationMode::Decimal => 2,
            ValidationMode::Alphanumeric => 3,
            ValidationMode::Name => 4,
            ValidationMode::EmailAddress => 5,
            ValidationMode::IpAddress => 6,
            ValidationMode::Sentence => 7,
            ValidationMode::Custom => 8,
            ValidationMode::DecimalForcePoint => 9,
        }
    }
}

/// Line handling for the field.
///
/// Line-break characters are stripped before any other validation unless the
/// field is multi-line with newline submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LineType {
    /// One line; `\r`/`\n` are stripped.
    #[default]
    SingleLine,
    /// Multiple visual lines, return key submits; `\r`/`\n` are stripped.
    MultiLineSubmit,
    /// Multiple lines, return key inserts a newline.
    MultiLineNewline,
}

impl TryFrom<u8> for LineType {
    type Error = OrdinalError;

    fn try_from(value: u8) -> Result<Self, OrdinalError> {
        Ok(match value {
            0 => Self::SingleLine,
            1 => Self::MultiLineSubmit,
            2 => Self::MultiLineNewline,
            _ => {
                return Err(OrdinalError {
                    name: "LineType",
                    value,
                });
            }
        })
    }
}

impl From<LineType> for u8 {
    fn from(line_type: LineType) -> Self {
        match line_type {
            LineType::SingleLine => 0,
            LineType::MultiLineSubmit => 1,
            LineType::MultiLineNewline => 2,
        }
    }
}

/// Integer and decimal acceptance, shared by the three numeric modes.
///
/// A dash is accepted at position 0, or when the caret or selection anchor
/// sits at the field start. While the position is 0 in front of an existing
/// dash, everything is rejected unless the selection spans across the dash
/// (the dash is being replaced).
pub(crate) fn accept_numeric(
    mode: ValidationMode,
    ch: char,
    ctx: &CharContext<'_>,
) -> Option<char> {
    let leading_dash = ctx.accepted.first() == Some(&'-');
    let cursor_before_dash = ctx.pos == 0 && leading_dash;
    let dash_in_selection = leading_dash
        && ((ctx.caret == 0 && matches!(ctx.selection_start, Some(s) if s > 0))
            || (ctx.selection_start == Some(0) && ctx.caret > 0));
    let selection_at_start = ctx.caret == 0 || ctx.selection_start == Some(0);

    if cursor_before_dash && !dash_in_selection {
        return None;
    }

    if ch.is_ascii_digit() {
        return Some(ch);
    }
    if ch == '-' && (ctx.pos == 0 || selection_at_start) {
        return Some(ch);
    }
    match mode {
        ValidationMode::Decimal => {
            if (ch == '.' || ch == ',') && !ctx.contains('.') && !ctx.contains(',') {
                return Some(ch);
            }
        }
        ValidationMode::DecimalForcePoint => {
            if ch == '.' && !ctx.contains('.') {
                return Some(ch);
            }
            if ch == ',' && !ctx.contains('.') {
                return Some('.');
            }
        }
        _ => {}
    }
    None
}

/// ASCII letters and digits only.
pub(crate) fn accept_alphanumeric(ch: char) -> Option<char> {
    ch.is_ascii_alphanumeric().then_some(ch)
}

/// Personal-name acceptance with case correction.
///
/// A lowercase letter at position 0 or after a space is upcast; an uppercase
/// letter elsewhere (except after an apostrophe) is downcast; spaces and a
/// single apostrophe are accepted but never consecutively.
///
/// Best effort by design: compound edits (deleting in front of an uppercase
/// letter, inserting mid-word, erasing the space between words) can leave
/// inconsistent casing behind. The rules this mode approximates are too
/// complex for per-character verification; the residue is accepted, not
/// silently repaired.
pub(crate) fn accept_name(ch: char, ctx: &CharContext<'_>) -> Option<char> {
    let prev = ctx.prev();
    let next = ctx.accepted.get(ctx.pos).copied();
    let breaks_run = |c: Option<char>| c == Some(' ') || c == Some('\'');

    if ch.is_alphabetic() {
        // Character following a space should be in uppercase.
        if ch.is_lowercase() && (ctx.pos == 0 || prev == Some(' ')) {
            return Some(upcase_single(ch));
        }
        // Character not following a space or an apostrophe should be in
        // lowercase.
        if ch.is_uppercase() && ctx.pos > 0 && prev != Some(' ') && prev != Some('\'') {
            return Some(downcase_single(ch));
        }
        return Some(ch);
    }

    if ch == '\'' {
        // One apostrophe total, never adjacent to a space or apostrophe.
        if !ctx.contains('\'') && !breaks_run(prev) && !breaks_run(next) {
            return Some(ch);
        }
    }

    if ch == ' ' && !breaks_run(prev) && !breaks_run(next) {
        return Some(ch);
    }

    None
}

/// Email-address acceptance.
///
/// Letters and digits always pass; one `@` total; the RFC-ish special set
/// passes; a dot passes only when neither the clamped previous nor the
/// clamped next accepted character is also a dot.
pub(crate) fn accept_email(ch: char, ctx: &CharContext<'_>) -> Option<char> {
    if ch.is_alphanumeric() {
        return Some(ch);
    }
    if ch == '@' && !ctx.contains('@') {
        return Some(ch);
    }
    if EMAIL_SPECIAL_CHARACTERS.contains(ch) {
        return Some(ch);
    }
    if ch == '.' {
        let len = ctx.accepted.len();
        let last = if len > 0 {
            ctx.accepted[ctx.pos.min(len - 1)]
        } else {
            ' '
        };
        let next = if len > 0 {
            ctx.accepted[(ctx.pos + 1).min(len - 1)]
        } else {
            '\n'
        };
        if last != '.' && next != '.' {
            return Some(ch);
        }
    }
    None
}

/// IP-address acceptance: four dot-separated sections of up to three digits.
///
/// Only digit counts are checked, not section values — `256` is accepted.
pub(crate) fn accept_ip(ch: char, ctx: &CharContext<'_>) -> Option<char> {
    let len = ctx.accepted.len();
    match ctx.last_index_of('.') {
        None => {
            if len < 3 && ch.is_ascii_digit() {
                return Some(ch);
            }
            // Don't start with a dot.
            if ch == '.' && len > 0 {
                return Some(ch);
            }
        }
        Some(last_dot) => {
            if ch.is_ascii_digit() && (len - 1) - last_dot < 3 {
                return Some(ch);
            }
            // Max 4 sections (3 dots), no consecutive dots.
            if ch == '.' && last_dot != len - 1 && ctx.occurrences('.') < 3 {
                return Some(ch);
            }
        }
    }
    None
}

/// Sentence-case acceptance: upcase a lowercase letter at position 0 or
/// after a `". "` sequence; everything else passes through unchanged.
pub(crate) fn accept_sentence(ch: char, ctx: &CharContext<'_>) -> Option<char> {
    if ch.is_alphabetic() && ch.is_lowercase() {
        if ctx.pos == 0 {
            return Some(upcase_single(ch));
        }
        if ctx.pos > 1
            && ctx.accepted.get(ctx.pos - 1) == Some(&' ')
            && ctx.accepted.get(ctx.pos - 2) == Some(&'.')
        {
            return Some(upcase_single(ch));
        }
    }
    Some(ch)
}
