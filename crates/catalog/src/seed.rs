//! Static seed catalog.
//!
//! The product *set* is defined locally by this seed; remote reconciliation
//! only overlays commercial fields on top of it. Prices start at zero and
//! stock at one until the first sync fills them in.

use vitrine_core::{Money, ProductId, Sku};

use crate::product::Product;

fn seed(id: &str, sku: &str, name: &str, category: &str) -> Product {
    Product {
        id: ProductId::from(id),
        sku: Sku::from(sku),
        name: name.to_owned(),
        category: category.to_owned(),
        price: Money::ZERO,
        stock: 1,
        image_url: name.trim().to_owned(),
    }
}

/// The locally defined catalog, in display order.
pub fn seed_catalog() -> Vec<Product> {
    vec![
        seed("lc-001", "LC0001", "Brinco Espiral Vazado", "Brincos"),
        seed("lc-002", "LC0002", "Brinco Quadrado Listrado", "Brincos"),
        seed("lc-003", "LC0003", "Colar Cartier com Borboleta Preta", "Colares"),
        seed("lc-004", "LC0004", "Colar Canutilhos com Esferas", "Colares"),
        seed("lc-006", "LC0006", "Brinco Ponto de Luz em Zircônia Cristal", "Brincos"),
        seed("lc-013", "LC0013", "Brinco Coração Plissado 1,3cm", "Brincos"),
        seed("lc-020", "LC0020", "Choker Corrente Torcida Diamantada", "Colares"),
        seed("lc-022", "LC0022", "Pulseira Elo Português com Coração, Cadeado, Trevo e Chave", "Pulseiras"),
        seed("lc-025", "LC0025", "Pulseira Cartier La Colle", "Pulseiras"),
        seed("lc-041", "LC0041", "Colar Cordão Baiano", "Colares"),
        seed("lc-045", "LC0045", "Pulseira de Pérolas e Bolinhas", "Pulseiras"),
        seed("lc-051", "LC0051", "Escapulário São Jorge", "Colares"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_skus_are_unique() {
        let catalog = seed_catalog();
        let skus: HashSet<_> = catalog.iter().map(|p| p.sku.clone()).collect();
        assert_eq!(skus.len(), catalog.len());
    }
}
