use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

/// `max_price` lets a client build its filter bar without a second call.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub count: Option<i64>,
    pub total: Option<i64>,
    pub max_price: Option<Decimal>,
}

impl Meta {
    pub fn new(count: i64, total: i64, max_price: Decimal) -> Self {
        Self {
            count: Some(count),
            total: Some(total),
            max_price: Some(max_price),
        }
    }

    pub fn empty() -> Self {
        Self {
            count: None,
            total: None,
            max_price: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
