//! `vitrine-cart` — quote cart domain module.
//!
//! Line-item accumulation and the wholesale minimum-order policy check,
//! implemented as deterministic domain logic (no IO).

pub mod eligibility;
pub mod ledger;

pub use eligibility::OrderEligibility;
pub use ledger::{CartLedger, CartLine};
