//! Reconciliation of remote commercial records into the local catalog.
//!
//! The catalog's product *set* is defined locally; remote records only overlay
//! the mutable commercial fields (`price`, `stock`, optionally `name` and
//! `category`) onto matching SKUs. Reconciliation never adds or removes
//! products, preserves catalog order, and is idempotent.

use serde::{Deserialize, Serialize};

use vitrine_core::{Money, Sku};

use crate::product::Product;

/// Partial product shape returned by the remote store, keyed by SKU.
///
/// Used exclusively as an overlay source, never as a standalone entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRecord {
    pub sku: Sku,
    pub price: Money,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl RemoteRecord {
    pub fn new(sku: impl Into<Sku>, price: Money, stock: u32) -> Self {
        Self {
            sku: sku.into(),
            price,
            stock,
            name: None,
            category: None,
        }
    }
}

fn apply_record(product: &mut Product, record: &RemoteRecord) {
    product.price = record.price;
    product.stock = record.stock;
    if let Some(name) = &record.name {
        product.name = name.clone();
    }
    if let Some(category) = &record.category {
        product.category = category.clone();
    }
}

/// Overlay a full record set onto the catalog.
///
/// Products without a matching record are returned unchanged. When the same
/// SKU appears more than once in `records`, the last occurrence wins
/// (arrival-order semantics, matching the delta contract).
pub fn overlay(catalog: &[Product], records: &[RemoteRecord]) -> Vec<Product> {
    catalog
        .iter()
        .map(|product| {
            let mut updated = product.clone();
            for record in records.iter().filter(|r| r.sku == product.sku) {
                apply_record(&mut updated, record);
            }
            updated
        })
        .collect()
}

/// Overlay a single changed record in place (push-notification path).
///
/// Returns `false` when no product matches the SKU — the notification is then
/// a no-op.
pub fn overlay_one(catalog: &mut [Product], record: &RemoteRecord) -> bool {
    match catalog.iter_mut().find(|p| p.sku == record.sku) {
        Some(product) => {
            apply_record(product, record);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::ProductId;

    fn product(id: &str, sku: &str, name: &str) -> Product {
        Product {
            id: ProductId::from(id),
            sku: Sku::from(sku),
            name: name.to_owned(),
            category: "Brincos".to_owned(),
            price: Money::ZERO,
            stock: 1,
            image_url: name.to_owned(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("lc-001", "LC0001", "Brinco Espiral Vazado"),
            product("lc-002", "LC0002", "Brinco Quadrado Listrado"),
            product("lc-003", "LC0003", "Colar Cartier"),
        ]
    }

    #[test]
    fn overlays_price_and_stock_on_matching_sku() {
        let records = vec![RemoteRecord::new("LC0002", Money::from_centavos(1990), 12)];
        let updated = overlay(&catalog(), &records);

        assert_eq!(updated[1].price, Money::from_centavos(1990));
        assert_eq!(updated[1].stock, 12);
        // Descriptive fields stay local when the record omits them.
        assert_eq!(updated[1].name, "Brinco Quadrado Listrado");
    }

    #[test]
    fn products_without_a_record_are_unchanged() {
        let before = catalog();
        let records = vec![RemoteRecord::new("LC0002", Money::from_centavos(500), 3)];
        let updated = overlay(&before, &records);

        assert_eq!(updated[0], before[0]);
        assert_eq!(updated[2], before[2]);
    }

    #[test]
    fn never_adds_products_and_preserves_order() {
        let before = catalog();
        let records = vec![
            RemoteRecord::new("LC9999", Money::from_reais(10), 5),
            RemoteRecord::new("LC0001", Money::from_reais(20), 2),
        ];
        let updated = overlay(&before, &records);

        assert_eq!(updated.len(), before.len());
        let skus: Vec<_> = updated.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["LC0001", "LC0002", "LC0003"]);
    }

    #[test]
    fn duplicate_skus_resolve_last_wins() {
        let records = vec![
            RemoteRecord::new("LC0001", Money::from_reais(10), 5),
            RemoteRecord::new("LC0001", Money::from_reais(25), 8),
        ];
        let updated = overlay(&catalog(), &records);

        assert_eq!(updated[0].price, Money::from_reais(25));
        assert_eq!(updated[0].stock, 8);
    }

    #[test]
    fn delta_with_unknown_sku_is_a_no_op() {
        let mut products = catalog();
        let before = products.clone();

        let touched = overlay_one(
            &mut products,
            &RemoteRecord::new("LC9999", Money::from_reais(99), 9),
        );

        assert!(!touched);
        assert_eq!(products, before);
    }

    #[test]
    fn delta_updates_only_the_matching_product() {
        let mut products = catalog();
        let record = RemoteRecord::new("LC0003", Money::from_centavos(4500), 7);

        assert!(overlay_one(&mut products, &record));
        assert_eq!(products[2].price, Money::from_centavos(4500));
        assert_eq!(products[0].price, Money::ZERO);
        assert_eq!(products[1].price, Money::ZERO);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_record() -> impl Strategy<Value = RemoteRecord> {
            ("LC000[1-9]", 0u64..100_000, 0u32..500).prop_map(|(sku, centavos, stock)| {
                RemoteRecord::new(sku.as_str(), Money::from_centavos(centavos), stock)
            })
        }

        proptest! {
            /// Property: applying the same record set twice yields the same
            /// result as applying it once.
            #[test]
            fn overlay_is_idempotent(records in proptest::collection::vec(arb_record(), 0..16)) {
                let once = overlay(&catalog(), &records);
                let twice = overlay(&once, &records);
                prop_assert_eq!(once, twice);
            }

            /// Property: the product set and its order are invariant under
            /// reconciliation.
            #[test]
            fn overlay_preserves_the_product_set(records in proptest::collection::vec(arb_record(), 0..16)) {
                let before = catalog();
                let after = overlay(&before, &records);
                prop_assert_eq!(after.len(), before.len());
                for (b, a) in before.iter().zip(after.iter()) {
                    prop_assert_eq!(&b.sku, &a.sku);
                    prop_assert_eq!(&b.id, &a.id);
                }
            }
        }
    }
}
