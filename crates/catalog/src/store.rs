//! Canonical in-memory catalog with explicit change subscription.
//!
//! The store exclusively owns the authoritative product list. Consumers hold
//! a reference to the store (no ambient singletons) and subscribe for change
//! notifications instead of polling.

use vitrine_core::{DomainError, DomainResult, Money, Sku};

use crate::product::Product;
use crate::reconcile::{self, RemoteRecord};
use crate::watch::{Publisher, Subscription};

/// Notification published after the catalog changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// A full remote snapshot was reconciled; `matched` products had a record.
    SnapshotApplied { matched: usize },
    /// A single product's mutable fields changed (push delta or admin edit).
    ProductChanged { sku: Sku },
}

/// Owner of the canonical product list.
#[derive(Debug)]
pub struct CatalogStore {
    products: Vec<Product>,
    publisher: Publisher<CatalogEvent>,
}

impl CatalogStore {
    /// Build a store from seed data.
    ///
    /// SKUs must be unique across the catalog — they are the reconciliation
    /// join key.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if !seen.insert(product.sku.clone()) {
                return Err(DomainError::invariant(format!(
                    "duplicate sku in catalog: {}",
                    product.sku
                )));
            }
        }
        Ok(Self {
            products,
            publisher: Publisher::new(),
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, sku: &Sku) -> Option<&Product> {
        self.products.iter().find(|p| &p.sku == sku)
    }

    /// Subscribe to change notifications. Dropping the subscription
    /// unsubscribes.
    pub fn subscribe(&mut self) -> Subscription<CatalogEvent> {
        self.publisher.subscribe()
    }

    /// Reconcile a full remote record set into the catalog.
    ///
    /// Returns how many products had a matching record. Callers pass a fully
    /// parsed response here — a failed or malformed fetch never reaches this
    /// method, so prior state survives partial failures untouched.
    pub fn apply_snapshot(&mut self, records: &[RemoteRecord]) -> usize {
        self.products = reconcile::overlay(&self.products, records);
        let matched = self
            .products
            .iter()
            .filter(|p| records.iter().any(|r| r.sku == p.sku))
            .count();
        self.publisher
            .publish(&CatalogEvent::SnapshotApplied { matched });
        matched
    }

    /// Apply a single push delta in place. Unknown SKUs are a no-op.
    pub fn apply_delta(&mut self, record: &RemoteRecord) -> bool {
        let touched = reconcile::overlay_one(&mut self.products, record);
        if touched {
            self.publisher.publish(&CatalogEvent::ProductChanged {
                sku: record.sku.clone(),
            });
        }
        touched
    }

    /// Local admin edit of a product's commercial fields.
    ///
    /// Returns `false` when the SKU is unknown.
    pub fn update_commercial(&mut self, sku: &Sku, price: Money, stock: u32) -> bool {
        match self.products.iter_mut().find(|p| &p.sku == sku) {
            Some(product) => {
                product.price = price;
                product.stock = stock;
                let sku = sku.clone();
                self.publisher.publish(&CatalogEvent::ProductChanged { sku });
                true
            }
            None => false,
        }
    }
}
