//! `vitrine-core` — storefront foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, money, the wholesale policy and the storefront options.

pub mod config;
pub mod error;
pub mod id;
pub mod money;

pub use config::{StoreOptions, WholesaleConfig};
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, Sku};
pub use money::Money;
