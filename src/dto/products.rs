use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Product;

pub const PLACEHOLDER_DESCRIPTION: &str = "This is a dummy description for now.";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// Peso display string with centavos, e.g. `₱25.00`.
pub fn peso(amount: Decimal) -> String {
    format!("₱{amount:.2}")
}

/// A product as the screens consume it, placeholders already filled.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDto {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub display_price: String,
    pub description: String,
    pub image_uri: String,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            price: product.price,
            display_price: peso(product.price),
            description: product
                .description
                .unwrap_or_else(|| PLACEHOLDER_DESCRIPTION.to_string()),
            image_uri: product
                .image_uri
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        }
    }
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        ProductDto::from(product.clone())
    }
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<ProductDto>)]
    pub items: Vec<ProductDto>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<String>)]
    pub items: Vec<String>,
}
