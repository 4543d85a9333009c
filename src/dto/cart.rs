use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::products::ProductDto;
use crate::models::CartLine;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: u32,
    /// Units to add; defaults to 1.
    pub quantity: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartLineDto {
    pub product: ProductDto,
    pub quantity: u32,
    pub line_total: Decimal,
}

impl From<CartLine> for CartLineDto {
    fn from(line: CartLine) -> Self {
        let line_total = line.line_total();
        Self {
            product: ProductDto::from(line.product),
            quantity: line.quantity,
            line_total,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<CartLineDto>,
    pub count: u32,
    pub total: Decimal,
    pub display_total: String,
}
