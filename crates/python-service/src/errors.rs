//! Centralized error handling.
//!
//! Request handlers are infallible; every error here is a startup or
//! server-lifecycle failure and aborts the process.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// An environment value could not be coerced to its setting's type
    #[error("Invalid configuration: {0}")]
    Config(#[from] envy::Error),

    /// The env file exists but could not be read or parsed
    #[error("Invalid env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[source] std::io::Error),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
