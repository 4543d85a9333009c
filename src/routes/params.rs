use std::collections::BTreeSet;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::catalog::Catalog;
use crate::filter::{FilterState, SortOption};

/// `categories` is comma-separated; `max_price` stays text so a non-numeric
/// entry can fall back instead of rejecting the request.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductQuery {
    pub categories: Option<String>,
    pub max_price: Option<String>,
    pub sort: Option<SortOption>,
}

impl ProductQuery {
    /// An absent ceiling is the catalog maximum; an unparseable one becomes 0
    /// rather than an error.
    pub fn into_filter(self, catalog: &Catalog) -> FilterState {
        let categories: BTreeSet<String> = self
            .categories
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect();

        let ceiling = match self.max_price.as_deref() {
            None => catalog.max_price(),
            Some(raw) => Decimal::from_str(raw.trim()).unwrap_or(Decimal::ZERO),
        };

        FilterState {
            categories,
            ceiling,
            sort: self.sort,
        }
    }
}
