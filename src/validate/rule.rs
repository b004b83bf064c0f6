//! Rules and the corrective actions they apply.

use serde::{Deserialize, Serialize};

use crate::error::OrdinalError;
use crate::validate::{CharContext, Condition, downcase_single, upcase_single};

/// Corrective action applied to a character once a rule matches (or as the
/// fallback when none does).
///
/// Ordinals are part of the configuration wire format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CharacterAction {
    /// Keep the character unchanged.
    #[default]
    Allow,
    /// Drop the character from the buffer.
    Block,
    /// Rewrite to uppercase (already-uppercase characters pass unchanged).
    ToUppercase,
    /// Rewrite to lowercase (already-lowercase characters pass unchanged).
    ToLowercase,
    /// Replace with the character whose code is the action parameter,
    /// regardless of input.
    Replace,
}

impl TryFrom<u8> for CharacterAction {
    type Error = OrdinalError;

    fn try_from(value: u8) -> Result<Self, OrdinalError> {
        Ok(match value {
            0 => Self::Allow,
            1 => Self::Block,
            2 => Self::ToUppercase,
            3 => Self::ToLowercase,
            4 => Self::Replace,
            _ => {
                return Err(OrdinalError {
                    name: "CharacterAction",
                    value,
                });
            }
        })
    }
}

impl From<CharacterAction> for u8 {
    fn from(action: CharacterAction) -> Self {
        match action {
            CharacterAction::Allow => 0,
            CharacterAction::Block => 1,
            CharacterAction::ToUppercase => 2,
            CharacterAction::ToLowercase => 3,
            CharacterAction::Replace => 4,
        }
    }
}

impl CharacterAction {
    /// Apply this action to `ch`. `None` rejects the character — it is
    /// dropped from the buffer, which is normal control flow, not an error.
    ///
    /// `value` is the action parameter, used only by [`Self::Replace`]; a
    /// parameter that is not a valid scalar value rejects the character
    /// instead of panicking.
    #[must_use]
    pub fn apply(self, ch: char, value: i32) -> Option<char> {
        match self {
            Self::Allow => Some(ch),
            Self::Block => None,
            Self::ToUppercase => Some(upcase_single(ch)),
            Self::ToLowercase => Some(downcase_single(ch)),
            Self::Replace => u32::try_from(value).ok().and_then(char::from_u32),
        }
    }
}

/// Ordered conjunction of conditions mapped to one corrective action.
///
/// Stateless; rules are evaluated by [`CharacterValidator`] in configured
/// order and the first match wins.
///
/// [`CharacterValidator`]: crate::validate::CharacterValidator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRule {
    /// Conditions that must all hold, in configured order.
    pub conditions: Vec<Condition>,
    /// Action applied when the rule matches.
    pub action: CharacterAction,
    /// Action parameter (a character code, used by replace).
    #[serde(rename = "actionIntValue")]
    pub action_value: i32,
}

impl CharacterRule {
    /// True iff the condition list is non-empty and every condition holds
    /// (short-circuit AND).
    ///
    /// An empty condition list never matches: a rule with no conditions
    /// would otherwise silently match every character, which is always a
    /// configuration mistake.
    #[must_use]
    pub fn matches(&self, ch: char, ctx: &CharContext<'_>) -> bool {
        !self.conditions.is_empty() && self.conditions.iter().all(|c| c.is_met(ch, ctx))
    }

    /// Apply this rule's action to `ch`.
    #[must_use]
    pub fn apply(&self, ch: char) -> Option<char> {
        self.action.apply(ch, self.action_value)
    }
}
