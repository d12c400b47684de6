//! Cart ledger: line items and totals.

use serde::{Deserialize, Serialize};

use vitrine_catalog::Product;
use vitrine_core::{Money, ProductId};

/// One cart line: a captured product copy plus a positive quantity.
///
/// The captured `price` may drift from the live catalog price if
/// reconciliation updates it after the item was added. That staleness is
/// accepted — totals always use the captured value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

/// Accumulates line items for the quote.
///
/// Invariant: at most one line per product identity — re-adding an existing
/// product increments its quantity instead of duplicating the line.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a ledger persisted by the local cache.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` of `product`, merging into an existing line when the
    /// product identity is already present. Zero quantities are bumped to one
    /// so a line can never be created empty.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        let quantity = quantity.max(1);
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            }),
        }
    }

    /// Set a line's quantity directly, clamped to a minimum of 1.
    ///
    /// Removal is a distinct explicit operation; this path never produces a
    /// zero or negative quantity. Unknown identities are a no-op.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product.id == id) {
            line.quantity = quantity.max(1);
        }
    }

    /// Delete the line entirely, regardless of quantity. Unknown identities
    /// are a no-op.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.lines.retain(|l| &l.product.id != id);
    }

    /// Sum of `price * quantity` across lines, using captured prices.
    pub fn total_value(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of all line quantities (badge count).
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::Sku;

    fn product(id: &str, sku: &str, centavos: u64) -> Product {
        Product {
            id: ProductId::from(id),
            sku: Sku::from(sku),
            name: format!("Produto {sku}"),
            category: "Brincos".to_owned(),
            price: Money::from_centavos(centavos),
            stock: 50,
            image_url: String::new(),
        }
    }

    #[test]
    fn adding_the_same_product_merges_into_one_line() {
        let mut cart = CartLedger::new();
        let brinco = product("lc-001", "LC0001", 1990);

        cart.add_item(&brinco, 2);
        cart.add_item(&brinco, 3);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn totals_follow_captured_prices() {
        let mut cart = CartLedger::new();
        cart.add_item(&product("lc-001", "LC0001", 1990), 3);
        cart.add_item(&product("lc-002", "LC0002", 4500), 1);

        assert_eq!(cart.total_value(), Money::from_centavos(10470));
        assert_eq!(cart.total_quantity(), 4);
    }

    #[test]
    fn captured_price_survives_catalog_drift() {
        let mut cart = CartLedger::new();
        let mut brinco = product("lc-001", "LC0001", 1990);
        cart.add_item(&brinco, 2);

        // Reconciliation updates the catalog copy, not the cart's.
        brinco.price = Money::from_centavos(2490);

        assert_eq!(cart.total_value(), Money::from_centavos(3980));
    }

    #[test]
    fn update_quantity_clamps_to_one() {
        let mut cart = CartLedger::new();
        let brinco = product("lc-001", "LC0001", 1990);
        cart.add_item(&brinco, 4);

        cart.update_quantity(&brinco.id, 0);
        assert_eq!(cart.lines()[0].quantity, 1);

        cart.update_quantity(&brinco.id, 7);
        assert_eq!(cart.lines()[0].quantity, 7);
    }

    #[test]
    fn unknown_identity_is_a_no_op_for_update_and_remove() {
        let mut cart = CartLedger::new();
        cart.add_item(&product("lc-001", "LC0001", 1990), 1);
        let before = cart.clone();

        let ghost = ProductId::from("lc-999");
        cart.update_quantity(&ghost, 10);
        cart.remove_item(&ghost);

        assert_eq!(cart, before);
    }

    #[test]
    fn remove_deletes_the_line_regardless_of_quantity() {
        let mut cart = CartLedger::new();
        let brinco = product("lc-001", "LC0001", 1990);
        cart.add_item(&brinco, 12);

        cart.remove_item(&brinco.id);
        assert!(cart.is_empty());
        assert_eq!(cart.total_value(), Money::ZERO);
    }

    #[test]
    fn zero_quantity_add_creates_a_single_unit_line() {
        let mut cart = CartLedger::new();
        cart.add_item(&product("lc-001", "LC0001", 1990), 0);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: sequential adds of the same product accumulate to the
            /// sum of quantities in a single line.
            #[test]
            fn adds_accumulate_without_duplicating_lines(
                quantities in proptest::collection::vec(1u32..50, 1..10)
            ) {
                let mut cart = CartLedger::new();
                let brinco = product("lc-001", "LC0001", 1990);
                for q in &quantities {
                    cart.add_item(&brinco, *q);
                }
                prop_assert_eq!(cart.lines().len(), 1);
                prop_assert_eq!(cart.total_quantity(), quantities.iter().sum::<u32>());
            }

            /// Property: total equals the sum of line subtotals.
            #[test]
            fn total_is_sum_of_subtotals(
                prices in proptest::collection::vec(1u64..100_000, 1..8)
            ) {
                let mut cart = CartLedger::new();
                for (i, centavos) in prices.iter().enumerate() {
                    let p = product(&format!("lc-{i:03}"), &format!("LC{i:04}"), *centavos);
                    cart.add_item(&p, (i as u32 % 5) + 1);
                }
                let expected: Money = cart.lines().iter().map(CartLine::subtotal).sum();
                prop_assert_eq!(cart.total_value(), expected);
            }
        }
    }
}
