//! `vitrine-storefront` — the parameterized storefront.
//!
//! One implementation replaces the near-identical variants of the original
//! storefront; their differences are expressed through
//! [`vitrine_core::StoreOptions`] (cart on/off, remote sync on/off, admin
//! secret). The storefront owns the catalog store, the quote cart and the
//! admin gate, and exposes the operations the UI layer calls.

pub mod input;
pub mod storefront;

pub use input::coerce_stock;
pub use storefront::Storefront;
