//! `vitrine-catalog` — catalog domain module.
//!
//! This crate contains the business rules for the product catalog, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage):
//!
//! - the canonical in-memory product list ([`CatalogStore`]) with an explicit
//!   change-subscription mechanism,
//! - reconciliation of remote price/stock records into the local catalog,
//! - free-text / category filtering of the visible subset.

pub mod filter;
pub mod product;
pub mod reconcile;
pub mod seed;
pub mod store;
pub mod watch;

pub use filter::{ALL_CATEGORIES, CategoryFilter, category_options, filter_products};
pub use product::{PLACEHOLDER_IMAGE, Product};
pub use reconcile::{RemoteRecord, overlay, overlay_one};
pub use seed::seed_catalog;
pub use store::{CatalogEvent, CatalogStore};
pub use watch::Subscription;
