use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::catalog::Catalog;
use crate::models::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

/// Derived per request from query parameters, never stored server-side.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub categories: BTreeSet<String>,
    pub ceiling: Decimal,
    pub sort: Option<SortOption>,
}

impl FilterState {
    /// The reset state; applying it returns the full catalog unchanged.
    pub fn initial(catalog: &Catalog) -> Self {
        Self {
            categories: BTreeSet::new(),
            ceiling: catalog.max_price(),
            sort: None,
        }
    }
}

/// Category filter (empty set selects everything), then the inclusive price
/// ceiling, then an optional stable sort; ties keep catalog order.
pub fn apply<'a>(catalog: &'a Catalog, filter: &FilterState) -> Vec<&'a Product> {
    let mut items: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| filter.categories.is_empty() || filter.categories.contains(&p.category))
        .filter(|p| p.price >= Decimal::ZERO && p.price <= filter.ceiling)
        .collect();

    if let Some(sort) = filter.sort {
        match sort {
            SortOption::PriceAsc => items.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOption::PriceDesc => items.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOption::NameAsc => items.sort_by(|a, b| name_key(a).cmp(&name_key(b))),
            SortOption::NameDesc => items.sort_by(|a, b| name_key(b).cmp(&name_key(a))),
        }
    }

    items
}

// Case-insensitive sort key; the catalog is Latin-script, so Unicode
// lowercasing stands in for locale collation.
fn name_key(product: &Product) -> String {
    product.name.to_lowercase()
}
