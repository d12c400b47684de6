//! Product model and image fallback chain.

use serde::{Deserialize, Serialize};

use vitrine_core::{Money, ProductId, Sku};

/// Shown when every candidate image representation fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/produtos/placeholder.jpg";

/// Extensions tried in order when resolving a product image.
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// A catalog product.
///
/// `sku` is the unique business key used to join the catalog with remote
/// records; `id` is a separate local identifier (cart lines are keyed by it).
/// `image_url` is a semantic pointer to an external asset — the base file name
/// under the image folder, without extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: Sku,
    pub name: String,
    pub category: String,
    pub price: Money,
    pub stock: u32,
    pub image_url: String,
}

impl Product {
    /// Ordered list of concrete URLs to try for this product's image.
    ///
    /// The asset folder stores files under several extensions, so the UI walks
    /// this list on load failure and falls back to [`PLACEHOLDER_IMAGE`] when
    /// the chain is exhausted.
    pub fn image_candidates(&self) -> Vec<String> {
        IMAGE_EXTENSIONS
            .iter()
            .map(|ext| format!("/produtos/{}.{ext}", self.image_url.trim()))
            .collect()
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::from("lc-001"),
            sku: Sku::from("LC0001"),
            name: "Brinco Espiral Vazado".to_owned(),
            category: "Brincos".to_owned(),
            price: Money::from_centavos(1990),
            stock: 5,
            image_url: "Brinco Espiral Vazado".to_owned(),
        }
    }

    #[test]
    fn image_candidates_try_every_extension_in_order() {
        let candidates = product().image_candidates();
        assert_eq!(
            candidates,
            vec![
                "/produtos/Brinco Espiral Vazado.jpg",
                "/produtos/Brinco Espiral Vazado.jpeg",
                "/produtos/Brinco Espiral Vazado.png",
                "/produtos/Brinco Espiral Vazado.webp",
            ]
        );
    }

    #[test]
    fn stock_zero_is_out_of_stock() {
        let mut p = product();
        assert!(p.in_stock());
        p.stock = 0;
        assert!(!p.in_stock());
    }
}
