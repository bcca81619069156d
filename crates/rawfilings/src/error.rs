//! Error types for client operations.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while configuring the client or fetching filings.
///
/// HTTP responses with a non-200 status are not errors; they are returned
/// as a [`FilingResponse`](crate::FilingResponse) for the caller to inspect.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No API key was given explicitly or found in the environment
    #[error("Missing API key: pass one explicitly or set {env_var}")]
    MissingCredential {
        /// Environment variable that was consulted
        env_var: &'static str,
    },

    /// The HTTP exchange could not be completed
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// IO error while writing a filing to disk
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
