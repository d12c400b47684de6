//! Storefront policy and options.
//!
//! Both structures are loaded once at startup and read-only thereafter.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Wholesale order policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WholesaleConfig {
    /// Minimum order value required before checkout is allowed (inclusive).
    pub min_order_value: Money,
    /// Advisory per-item minimum; surfaced to the UI, not enforced here.
    pub min_quantity_per_item: u32,
}

impl Default for WholesaleConfig {
    fn default() -> Self {
        Self {
            min_order_value: Money::from_reais(1500),
            min_quantity_per_item: 3,
        }
    }
}

/// Feature flags distinguishing the storefront variants.
///
/// The catalog-only variant runs with `enable_cart: false`; the static variant
/// (seed data only) runs with `enable_remote_sync: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOptions {
    pub enable_cart: bool,
    pub enable_remote_sync: bool,
    /// Static secret guarding the admin edit mode. Compared by exact string
    /// equality; production-grade secret handling is an explicit non-goal.
    pub admin_secret: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            enable_cart: true,
            enable_remote_sync: true,
            admin_secret: "lacolle2024".to_owned(),
        }
    }
}
