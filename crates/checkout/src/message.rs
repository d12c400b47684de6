//! Quote message formatting.
//!
//! Layout (Portuguese, store convention "R$", two decimals throughout):
//!
//! ```text
//! Olá La Colle & CO! Gostaria de solicitar um orçamento no atacado:
//!
//! • LC0001 - Brinco X
//!   Qtd: 2 x R$ 19.90 = R$ 39.80
//!
//! *Total do Orçamento: R$ 39.80*
//! ```

use urlencoding::encode;

use vitrine_cart::CartLine;
use vitrine_core::Money;

/// Store contact number the deep link targets.
pub const STORE_WHATSAPP_PHONE: &str = "5511973420966";

const GREETING: &str = "Olá La Colle & CO! Gostaria de solicitar um orçamento no atacado:\n\n";

/// The plain-text order summary: greeting, one block per line item, grand
/// total footer.
pub fn order_summary(lines: &[CartLine], total: Money) -> String {
    let items = lines
        .iter()
        .map(|line| {
            format!(
                "• {} - {}\n  Qtd: {} x R$ {} = R$ {}",
                line.product.sku,
                line.product.name,
                line.quantity,
                line.product.price,
                line.subtotal(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{GREETING}{items}\n\n*Total do Orçamento: R$ {total}*")
}

/// The summary percent-encoded for embedding as a URL query parameter.
pub fn encoded_summary(lines: &[CartLine], total: Money) -> String {
    encode(&order_summary(lines, total)).into_owned()
}

/// Full messaging deep link (`https://wa.me/<phone>?text=<encoded summary>`).
pub fn whatsapp_link(phone: &str, lines: &[CartLine], total: Money) -> String {
    format!("https://wa.me/{phone}?text={}", encoded_summary(lines, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_catalog::Product;
    use vitrine_core::{ProductId, Sku};

    fn line(sku: &str, name: &str, centavos: u64, quantity: u32) -> CartLine {
        CartLine {
            product: Product {
                id: ProductId::from(sku.to_lowercase()),
                sku: Sku::from(sku),
                name: name.to_owned(),
                category: "Brincos".to_owned(),
                price: Money::from_centavos(centavos),
                stock: 10,
                image_url: String::new(),
            },
            quantity,
        }
    }

    fn is_valid_url_component(s: &str) -> bool {
        // Every byte must be unreserved or part of a %XX escape.
        let bytes = s.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => i += 1,
                b'%' => {
                    if i + 2 >= bytes.len()
                        || !bytes[i + 1].is_ascii_hexdigit()
                        || !bytes[i + 2].is_ascii_hexdigit()
                    {
                        return false;
                    }
                    i += 3;
                }
                _ => return false,
            }
        }
        true
    }

    #[test]
    fn summary_lists_sku_quantity_and_subtotal() {
        let lines = vec![line("LC0001", "Brinco X", 1990, 2)];
        let summary = order_summary(&lines, Money::from_centavos(3980));

        assert!(summary.starts_with("Olá La Colle & CO!"));
        assert!(summary.contains("LC0001"));
        assert!(summary.contains("Qtd: 2 x R$ 19.90 = R$ 39.80"));
        assert!(summary.ends_with("*Total do Orçamento: R$ 39.80*"));
    }

    #[test]
    fn multi_line_summary_separates_items_with_blank_lines() {
        let lines = vec![
            line("LC0001", "Brinco X", 1990, 3),
            line("LC0002", "Colar Y", 4500, 1),
        ];
        let summary = order_summary(&lines, Money::from_centavos(10470));

        assert!(summary.contains("• LC0001 - Brinco X\n"));
        assert!(summary.contains("\n\n• LC0002 - Colar Y\n"));
        assert!(summary.contains("R$ 104.70"));
    }

    #[test]
    fn encoded_summary_is_a_valid_url_component() {
        let lines = vec![line("LC0001", "Brinco Coração Plissado 1,3cm", 1990, 2)];
        let encoded = encoded_summary(&lines, Money::from_centavos(3980));

        assert!(is_valid_url_component(&encoded));
        // Spaces and newlines must not survive unescaped.
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        assert!(encoded.contains("LC0001"));
    }

    #[test]
    fn deep_link_targets_the_store_phone() {
        let lines = vec![line("LC0001", "Brinco X", 1990, 2)];
        let link = whatsapp_link(STORE_WHATSAPP_PHONE, &lines, Money::from_centavos(3980));

        assert!(link.starts_with("https://wa.me/5511973420966?text="));
        let query = link.split_once("?text=").unwrap().1;
        assert!(is_valid_url_component(query));
    }
}
