//! Error types for the `get` command.

use thiserror::Error;

/// Result type for fetch-and-render operations.
pub type GetResult<T> = Result<T, GetError>;

/// Errors that end a `get` invocation.
#[derive(Debug, Error)]
pub enum GetError {
    /// Bad keyword, missing service name, or neither `--all` nor names.
    /// Raised before any network call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport or non-2xx failure from the PMS.
    #[error("{0:#}")]
    Fetch(anyhow::Error),

    /// Client could not be built (bad endpoint, unreadable CA file).
    #[error("{0:#}")]
    Client(anyhow::Error),
}

impl GetError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Whether the CLI should follow the message with command help
    pub fn wants_help(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
