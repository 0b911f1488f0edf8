//! Error types for augment-core

/// Result type for augment-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the augmentation engine.
///
/// All of them abort the call; nothing is written on error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {what}: {message}")]
    ParseError { what: String, message: String },

    #[error("Cannot extend {key}: {reason}")]
    StructureError { key: String, reason: String },

    #[error("Invalid catalog: {message}")]
    CatalogError { message: String },
}

impl Error {
    pub fn parse(what: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            what: what.into(),
            message: message.into(),
        }
    }

    pub fn structure(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StructureError {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::CatalogError {
            message: message.into(),
        }
    }
}

impl From<augment_yaml::Error> for Error {
    fn from(err: augment_yaml::Error) -> Self {
        Self::parse("document", err.to_string())
    }
}
