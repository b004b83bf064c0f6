//! Error types for oskbridge.

use std::fmt;

/// Result type alias for oskbridge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for oskbridge operations.
///
/// Rejected characters during validation are never errors — they are normal
/// control flow. Errors here are exclusively configuration problems, surfaced
/// to the caller so the collaborator layer can pick its fallback policy.
#[derive(Debug)]
pub enum Error {
    /// The keyboard configuration document failed to parse.
    Config(serde_json::Error),
    /// The nested custom-validator document failed to parse.
    CustomValidator(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid keyboard configuration: {e}"),
            Self::CustomValidator(e) => write!(f, "invalid custom validator document: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) | Self::CustomValidator(e) => Some(e),
        }
    }
}

/// An integer ordinal that does not map to any variant of a wire enum.
///
/// Enumerated configuration values travel as integer ordinals in declaration
/// order. An out-of-range ordinal fails loudly rather than being clamped or
/// indexed unchecked; the error surfaces through [`Error::Config`] or
/// [`Error::CustomValidator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrdinalError {
    /// Name of the enum as it appears in documentation.
    pub name: &'static str,
    /// The rejected ordinal.
    pub value: u8,
}

impl fmt::Display for OrdinalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no {} variant with ordinal {}", self.name, self.value)
    }
}

impl std::error::Error for OrdinalError {}
