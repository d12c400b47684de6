//! Prompt construction for the suggestion service.

use vitrine_catalog::Product;

/// Flatten the catalog into the one-line description the prompt embeds.
pub fn product_digest(products: &[Product]) -> String {
    products
        .iter()
        .map(|p| format!("{} (SKU: {}, Categoria: {})", p.name, p.sku, p.category))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The full persona prompt sent to the completion service.
pub fn build_prompt(query: &str, products: &[Product]) -> String {
    format!(
        "Você é o assistente virtual da La Colle & CO, uma loja de atacado de semijoias. \
         Responda em português. Ajude o cliente a encontrar produtos baseados na seguinte lista: {}. \
         A consulta do cliente é: \"{}\". \
         Seja elegante e direto. Se o cliente perguntar sobre tendências, sugira produtos da lista que combinem.",
        product_digest(products),
        query,
    )
}
