//! Connectivity status surfaced to the UI.

use serde::{Deserialize, Serialize};

/// Non-fatal status indicator for the remote store connection.
///
/// The storefront starts `Offline` (seed data only) and moves to `Connected`
/// after the first successful snapshot. Failures never crash the UI; the
/// worst case is degraded data freshness.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectivityState {
    Connected,
    #[default]
    Offline,
    /// Reached the store but the exchange failed (auth, malformed response).
    Error,
}

impl ConnectivityState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectivityState::Connected => "connected",
            ConnectivityState::Offline => "offline",
            ConnectivityState::Error => "error",
        }
    }

    pub fn is_connected(&self) -> bool {
        *self == ConnectivityState::Connected
    }
}
