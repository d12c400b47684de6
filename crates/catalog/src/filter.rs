//! Visible-subset derivation: free-text search and category selection.
//!
//! Pure functions of (catalog, query, category) — no hidden state; callers
//! recompute whenever any input changes.

use crate::product::Product;

/// Sentinel label for the unfiltered category selection.
pub const ALL_CATEGORIES: &str = "Todos";

/// Category selector: either every category or one exact match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a UI selection, mapping the sentinel back to [`CategoryFilter::All`].
    pub fn from_selection(selection: &str) -> Self {
        if selection == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(selection.to_owned())
        }
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

/// The subsequence of `catalog` matching the query and category selection.
///
/// The query is a case-insensitive substring match against product name or
/// SKU; an empty query matches everything.
pub fn filter_products<'a>(
    catalog: &'a [Product],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    catalog
        .iter()
        .filter(|p| {
            let text_match = needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.sku.matches_ignore_case(&needle);
            text_match && category.matches(p)
        })
        .collect()
}

/// Distinct categories present in the catalog, in first-seen order, prefixed
/// with the [`ALL_CATEGORIES`] sentinel.
pub fn category_options(catalog: &[Product]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_owned()];
    for product in catalog {
        if !options[1..].contains(&product.category) {
            options.push(product.category.clone());
        }
    }
    options
}
