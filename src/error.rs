//! Error types for the input filter.

use thiserror::Error;

/// Result type alias for untouchable operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while filtering input.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed command-line argument or configuration value.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The connection to the windowing system could not be established.
    #[error("input session unavailable: {0}")]
    SessionUnavailable(String),

    /// A synthetic event was rejected or could not be routed.
    #[error("failed to simulate event: {0}")]
    SimulateFailed(String),

    /// Grabbing or releasing an input device failed.
    #[error("grab failed: {0}")]
    GrabFailed(String),

    /// The session was closed while events were still expected.
    #[error("input session closed")]
    SessionClosed,

    /// The requested feature is not supported on this platform.
    #[error("not supported: {0}")]
    NotSupported(String),
}

impl Error {
    /// Whether the event loop can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::SimulateFailed(_) | Error::GrabFailed(_))
    }
}
