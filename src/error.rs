//! Errors for the layers around the engine (config, CLI arguments).
//!
//! The probability engine itself never fails: impossible and guaranteed
//! bets come back as 0.0 and 1.0.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum OddsError {
    #[error("config file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error in {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("missing required argument {0}")]
    MissingArgument(&'static str),

    #[error("unknown argument {0}")]
    UnknownArgument(String),
}

impl OddsError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        OddsError::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type Result<T, E = OddsError> = std::result::Result<T, E>;
