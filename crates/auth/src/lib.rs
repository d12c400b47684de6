//! `vitrine-auth` — admin gate for the edit mode.

pub mod gate;

pub use gate::{AdminGate, GateState};
