//! Sync adapter error taxonomy.

use thiserror::Error;

/// Failures talking to the remote product store.
///
/// Malformed responses are classified separately (`Parse`) but handled the
/// same way as connectivity failures: no partial application, prior catalog
/// state untouched.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Remote endpoint not configured (missing/invalid URL or key).
    #[error("remote store not configured: {0}")]
    Misconfigured(String),

    /// Transport-level failure (unreachable host, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The remote store answered with a non-success status.
    #[error("API error (status {0}): {1}")]
    Api(u16, String),

    /// The response body did not match the expected record shape.
    #[error("malformed response: {0}")]
    Parse(String),
}

impl SyncError {
    /// Whether this failure should surface as `Offline` rather than `Error`.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, SyncError::Network(_) | SyncError::Misconfigured(_))
    }
}
