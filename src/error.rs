//! Error types for wn
//!
//! Every failure surfaced by the client is one of these variants. Nothing is
//! retried: the first error aborts the whole invocation and is printed to the
//! shell verbatim, so the messages here are user-facing text.

use thiserror::Error;

/// Result type alias for wn operations
pub type WnResult<T> = Result<T, WnError>;

/// Main error type for wn operations
#[derive(Error, Debug)]
pub enum WnError {
    /// No version-control metadata found where expected
    #[error("{0}")]
    GitNotRepo(String),

    /// Repository exists but lacks the webbynode remote
    #[error("{0}")]
    GitRemoteDoesNotExist(String),

    /// Attempted remote creation collided with an existing remote of that name
    #[error("{0}")]
    GitRemoteAlreadyExists(String),

    /// Generic git failure, carrying the raw subprocess output
    #[error("{0}")]
    Git(String),

    /// Deployment descriptor missing
    #[error("{0}")]
    PushAndFileNotFound(String),

    /// The git config file could not be read (malformed syntax is tolerated,
    /// never raised)
    #[error("could not read git configuration: {0}")]
    ConfigParse(std::io::Error),

    /// IO error outside the config path (file creation, permissions)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Command name has no registered type
    #[error("command \"{0}\" doesn't exist")]
    UnknownCommand(String),
}
