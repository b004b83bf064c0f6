//! The user-configurable per-character policy.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::validate::{CharContext, CharacterAction, CharacterRule};

/// Ordered list of rules plus a fallback action, applied per character.
///
/// This is a first-match policy, not best-match: rules are tried in the
/// order they were authored and the first rule whose conditions all hold
/// decides the character. Rule order is a configuration contract and is
/// preserved exactly through (de)serialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterValidator {
    /// Rules in configured order.
    pub rules: Vec<CharacterRule>,
    /// Fallback action when no rule matches.
    #[serde(rename = "otherCharacterAction")]
    pub other_action: CharacterAction,
    /// Fallback action parameter.
    #[serde(rename = "otherCharacterActionIntValue")]
    pub other_action_value: i32,
}

impl CharacterValidator {
    /// Parse a custom-validator document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CustomValidator`] if the document is malformed or an
    /// enum ordinal is out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::CustomValidator)
    }

    /// Serialize back to the wire document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CustomValidator`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::CustomValidator)
    }

    /// Decide one character: first matching rule wins, otherwise the
    /// fallback action applies. `None` rejects the character.
    #[must_use]
    pub fn validate(&self, ch: char, ctx: &CharContext<'_>) -> Option<char> {
        for rule in &self.rules {
            if rule.matches(ch, ctx) {
                return rule.apply(ch);
            }
        }
        self.other_action.apply(ch, self.other_action_value)
    }
}
