//! Keyboard-show configuration.
//!
//! The host serializes one configuration document per keyboard show; every
//! enumerated value travels as an integer ordinal in declaration order. The
//! custom-validator policy arrives as a nested JSON-encoded string in
//! `characterValidatorJSON` (empty string: no custom policy).

use serde::{Deserialize, Serialize};

use crate::error::{Error, OrdinalError, Result};
use crate::validate::{CharacterValidator, LineType, ValidationMode};

/// Platform keyboard layout requested for the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum KeyboardType {
    #[default]
    Default,
    AsciiCapable,
    DecimalPad,
    Url,
    NumberPad,
    PhonePad,
    EmailAddress,
    NumbersAndPunctuation,
}

impl TryFrom<u8> for KeyboardType {
    type Error = OrdinalError;

    fn try_from(value: u8) -> std::result::Result<Self, OrdinalError> {
        Ok(match value {
            0 => Self::Default,
            1 => Self::AsciiCapable,
            2 => Self::DecimalPad,
            3 => Self::Url,
            4 => Self::NumberPad,
            5 => Self::PhonePad,
            6 => Self::EmailAddress,
            7 => Self::NumbersAndPunctuation,
            _ => {
                return Err(OrdinalError {
                    name: "KeyboardType",
                    value,
                });
            }
        })
    }
}

impl From<KeyboardType> for u8 {
    fn from(keyboard_type: KeyboardType) -> Self {
        match keyboard_type {
            KeyboardType::Default => 0,
            KeyboardType::AsciiCapable => 1,
            KeyboardType::DecimalPad => 2,
            KeyboardType::Url => 3,
            KeyboardType::NumberPad => 4,
            KeyboardType::PhonePad => 5,
            KeyboardType::EmailAddress => 6,
            KeyboardType::NumbersAndPunctuation => 7,
        }
    }
}

/// Automatic capitalization requested from the platform keyboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AutocapitalizationType {
    #[default]
    None,
    Characters,
    Words,
    Sentences,
}

impl TryFrom<u8> for AutocapitalizationType {
    type Error = OrdinalError;

    fn try_from(value: u8) -> std::result::Result<Self, OrdinalError> {
        Ok(match value {
            0 => Self::None,
            1 => Self::Characters,
            2 => Self::Words,
            3 => Self::Sentences,
            _ => {
                return Err(OrdinalError {
                    name: "AutocapitalizationType",
                    value,
                });
            }
        })
    }
}

impl From<AutocapitalizationType> for u8 {
    fn from(autocapitalization: AutocapitalizationType) -> Self {
        match autocapitalization {
            AutocapitalizationType::None => 0,
            AutocapitalizationType::Characters => 1,
            AutocapitalizationType::Words => 2,
            AutocapitalizationType::Sentences => 3,
        }
    }
}

/// Autofill hint the host wires to the platform view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AutofillType {
    #[default]
    None,
    Username,
    Password,
    NewPassword,
    OneTimeCode,
    Name,
    GivenName,
    MiddleName,
    FamilyName,
    Location,
    FullStreetAddress,
    StreetAddressLine1,
    StreetAddressLine2,
    AddressCity,
    AddressState,
    AddressCityAndState,
    CountryName,
    PostalCode,
    TelephoneNumber,
}

impl TryFrom<u8> for AutofillType {
    type Error = OrdinalError;

    fn try_from(value: u8) -> std::result::Result<Self, OrdinalError> {
        Ok(match value {
            0 => Self::None,
            1 => Self::Username,
            2 => Self::Password,
            3 => Self::NewPassword,
            4 => Self::OneTimeCode,
            5 => Self::Name,
            6 => Self::GivenName,
            7 => Self::MiddleName,
            8 => Self::FamilyName,
            9 => Self::Location,
            10 => Self::FullStreetAddress,
            11 => Self::StreetAddressLine1,
            12 => Self::StreetAddressLine2,
            13 => Self::AddressCity,
            14 => Self::AddressState,
            15 => Self::AddressCityAndState,
            16 => Self::CountryName,
            17 => Self::PostalCode,
            18 => Self::TelephoneNumber,
            _ => {
                return Err(OrdinalError {
                    name: "AutofillType",
                    value,
                });
            }
        })
    }
}

impl From<AutofillType> for u8 {
    fn from(autofill: AutofillType) -> Self {
        match autofill {
            AutofillType::None => 0,
            AutofillType::Username => 1,
            AutofillType::Password => 2,
            AutofillType::NewPassword => 3,
            AutofillType::OneTimeCode => 4,
            AutofillType::Name => 5,
            AutofillType::GivenName => 6,
            AutofillType::MiddleName => 7,
            AutofillType::FamilyName => 8,
            AutofillType::Location => 9,
            AutofillType::FullStreetAddress => 10,
            AutofillType::StreetAddressLine1 => 11,
            AutofillType::StreetAddressLine2 => 12,
            AutofillType::AddressCity => 13,
            AutofillType::AddressState => 14,
            AutofillType::AddressCityAndState => 15,
            AutofillType::CountryName => 16,
            AutofillType::PostalCode => 17,
            AutofillType::TelephoneNumber => 18,
        }
    }
}

/// Label/behavior of the platform return key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ReturnKeyType {
    #[default]
    Default,
    Go,
    Send,
    Search,
}

impl TryFrom<u8> for ReturnKeyType {
    type Error = OrdinalError;

    fn try_from(value: u8) -> std::result::Result<Self, OrdinalError> {
        Ok(match value {
            0 => Self::Default,
            1 => Self::Go,
            2 => Self::Send,
            3 => Self::Search,
            _ => {
                return Err(OrdinalError {
                    name: "ReturnKeyType",
                    value,
                });
            }
        })
    }
}

impl From<ReturnKeyType> for u8 {
    fn from(return_key: ReturnKeyType) -> Self {
        match return_key {
            ReturnKeyType::Default => 0,
            ReturnKeyType::Go => 1,
            ReturnKeyType::Send => 2,
            ReturnKeyType::Search => 3,
        }
    }
}

/// One keyboard-show configuration payload.
///
/// All fields are required; a missing field or out-of-range ordinal is a
/// parse error, surfaced to the caller rather than guessed around. The raw
/// `characterValidatorJSON` string is preserved so re-serializing the outer
/// document is exact.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardConfig {
    pub keyboard_type: KeyboardType,
    pub character_validation: ValidationMode,
    pub line_type: LineType,
    pub autocapitalization_type: AutocapitalizationType,
    pub autofill_type: AutofillType,
    pub return_key_type: ReturnKeyType,
    pub autocorrection: bool,
    pub secure: bool,
    pub rich_text_editing: bool,
    pub emojis_allowed: bool,
    pub has_next: bool,
    /// Maximum field length in characters; 0 means unlimited.
    pub character_limit: u32,
    #[serde(rename = "characterValidatorJSON")]
    character_validator_json: String,
    #[serde(skip)]
    custom_validator: Option<CharacterValidator>,
}

impl KeyboardConfig {
    /// Parse a configuration document, including the nested custom-validator
    /// document if one is present.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if the outer document is malformed;
    /// [`Error::CustomValidator`] if the nested document is. Neither is ever
    /// fatal to the caller — the collaborator layer decides the fallback
    /// (conventionally: run with validation disabled).
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json).map_err(Error::Config)?;
        if !config.character_validator_json.is_empty() {
            config.custom_validator =
                Some(CharacterValidator::from_json(&config.character_validator_json)?);
        }
        Ok(config)
    }

    /// Serialize back to the wire document.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Config)
    }

    /// The parsed custom-validator policy, if the document carried one.
    #[must_use]
    pub fn custom_validator(&self) -> Option<&CharacterValidator> {
        self.custom_validator.as_ref()
    }

    /// The raw nested custom-validator document.
    #[must_use]
    pub fn character_validator_json(&self) -> &str {
        &self.character_validator_json
    }
}
