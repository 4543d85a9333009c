use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::Product;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog {origin} is not a valid product list: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate product id {id} in catalog")]
    DuplicateId { id: u32 },

    #[error("product id {id} has a negative price")]
    NegativePrice { id: u32 },
}

/// The fixed product list for the session. Distinct categories (in order of
/// first appearance) and the maximum price are derived once, at load time.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
    max_price: Decimal,
}

impl Catalog {
    /// Fails on the first duplicate id or negative price.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId { id: product.id });
            }
            if product.price.is_sign_negative() {
                return Err(CatalogError::NegativePrice { id: product.id });
            }
        }

        let mut categories: Vec<String> = Vec::new();
        for product in &products {
            if !categories.iter().any(|c| c == &product.category) {
                categories.push(product.category.clone());
            }
        }

        let max_price = products
            .iter()
            .map(|p| p.price)
            .max()
            .unwrap_or(Decimal::ZERO);

        Ok(Self {
            products,
            categories,
            max_price,
        })
    }

    pub fn from_slice(bytes: &[u8], origin: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_slice(bytes).map_err(|source| CatalogError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        Self::new(products)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(&bytes, &path.display().to_string())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn max_price(&self) -> Decimal {
        self.max_price
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
