//! Filter pipeline: owner, category set and text query, applied conjunctively.

use shelfview_catalog::DisplayProduct;

use crate::selection::SelectionState;

/// Predicates derived from a [`SelectionState`], with the query already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter<'a> {
    owner: Option<&'a str>,
    categories: &'a [String],
    query: String,
}

impl<'a> ProductFilter<'a> {
    pub fn from_selection(state: &'a SelectionState) -> Self {
        Self {
            owner: state.selected_owner(),
            categories: state.selected_categories(),
            query: normalize_query(state.query()),
        }
    }

    /// Normalized query text (trimmed, lower-cased); empty means "no text filter".
    pub fn query(&self) -> &str {
        &self.query
    }

    fn owner_matches(&self, product: &DisplayProduct) -> bool {
        self.owner.is_none_or(|owner| owner == product.owner_name)
    }

    fn category_matches(&self, product: &DisplayProduct) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category.title)
    }

    fn query_matches(&self, product: &DisplayProduct) -> bool {
        self.query.is_empty() || product.name.to_lowercase().contains(&self.query)
    }

    /// Whether `product` survives every active predicate.
    pub fn matches(&self, product: &DisplayProduct) -> bool {
        self.owner_matches(product) && self.category_matches(product) && self.query_matches(product)
    }
}

/// Trim and lower-case a raw query.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Keep the products matching `state`, in their original relative order.
pub fn filter(products: &[DisplayProduct], state: &SelectionState) -> Vec<DisplayProduct> {
    let predicate = ProductFilter::from_selection(state);
    products.iter().filter(|p| predicate.matches(p)).cloned().collect()
}
