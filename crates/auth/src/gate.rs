//! Admin gate state machine.
//!
//! ```text
//! Locked --(request edit)--> AuthPrompt
//! AuthPrompt --(correct secret)--> Unlocked
//! AuthPrompt --(incorrect secret)--> AuthPrompt   (error flag set, input cleared)
//! AuthPrompt --(dismiss)--> Locked
//! Unlocked --(exit edit)--> Locked
//! ```
//!
//! The secret comparison is exact string equality against a fixed value. No
//! hashing, rate limiting or session expiry — this gate is a UI convenience,
//! not production security.

use serde::{Deserialize, Serialize};

/// Current gate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateState {
    Locked,
    /// The password prompt is showing; `failed` marks a rejected attempt.
    AuthPrompt { failed: bool },
    Unlocked,
}

/// Edit-mode gate guarded by a static secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminGate {
    secret: String,
    state: GateState,
}

impl AdminGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            state: GateState::Locked,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    /// Whether the last attempt on the open prompt failed.
    pub fn has_error(&self) -> bool {
        matches!(self.state, GateState::AuthPrompt { failed: true })
    }

    /// `Locked -> AuthPrompt`. No-op in any other state.
    pub fn request_edit(&mut self) {
        if self.state == GateState::Locked {
            self.state = GateState::AuthPrompt { failed: false };
        }
    }

    /// Attempt to unlock with `input`. Returns `true` on success.
    ///
    /// A wrong secret keeps the prompt open with the error flag set; the
    /// caller clears its input field. Submitting outside the prompt state is
    /// a no-op.
    pub fn submit_secret(&mut self, input: &str) -> bool {
        if !matches!(self.state, GateState::AuthPrompt { .. }) {
            return false;
        }
        if input == self.secret {
            self.state = GateState::Unlocked;
            true
        } else {
            self.state = GateState::AuthPrompt { failed: true };
            false
        }
    }

    /// `AuthPrompt -> Locked` without attempting the secret.
    pub fn dismiss(&mut self) {
        if matches!(self.state, GateState::AuthPrompt { .. }) {
            self.state = GateState::Locked;
        }
    }

    /// `Unlocked -> Locked`.
    pub fn exit_edit(&mut self) {
        if self.state == GateState::Unlocked {
            self.state = GateState::Locked;
        }
    }
}
