//! Error taxonomy for token generation.

use std::path::PathBuf;

/// Errors raised while loading, transforming or writing tokens.
///
/// Every variant is fatal for the generation run that produced it. Validation
/// happens before any artifact is written, so an error never leaves a
/// half-written file behind.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// A token value is neither a string nor a number.
    #[error("Invalid token value for \"{name}\": expected string or number, got {actual}")]
    InvalidTokenValue {
        /// The offending token name
        name: String,
        /// Runtime type of the value, in `typeof` vocabulary
        actual: &'static str,
    },

    /// A color token lacks the `Color` prefix every color name carries.
    #[error("cannot classify color token \"{name}\": expected a name starting with \"Color\"")]
    UnclassifiableColorToken { name: String },

    /// The token source could not be deserialized.
    #[error("failed to parse token source {origin}: {message}")]
    Source { origin: String, message: String },

    /// The token source file extension is not one we can read.
    #[error("unsupported token source format: {}", path.display())]
    UnsupportedSourceFormat { path: PathBuf },

    /// Serializing the variable map failed.
    #[error("failed to serialize variable map: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Rendering a generated artifact failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Reading or writing a file failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TokenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TokenError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = TokenError> = std::result::Result<T, E>;
