use std::error::Error as StdError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    InvalidConfig,
}

/// All errors returned by the fixtures.
///
/// Recipes never fail: an unconfigured recipe still produces a well-formed, minimal snapshot.
/// Only resolving a snapshot against a real Jenkins base URL can go wrong.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: Box<str>,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfig { .. } => ErrorKind::InvalidConfig,
        }
    }

    pub(crate) fn invalid_config(message: impl Into<Box<str>>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
            source: None,
        }
    }
}
