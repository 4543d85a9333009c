use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    dto::cart::{AddToCartRequest, CartLineDto, CartView},
    error::AppResult,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_view).post(add_to_cart).delete(clear_cart))
        .route("/{product_id}", delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart lines, unit count and totals", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn cart_view(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(cart_service::view_cart(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Line added or incremented", body = ApiResponse<CartLineDto>),
        (status = 400, description = "Unknown product or zero quantity"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartLineDto>>> {
    Ok(Json(cart_service::add_to_cart(&state, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = u32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Removed, or a no-op when the product was not in the cart", body = ApiResponse<serde_json::Value>),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(product_id): Path<u32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(
        cart_service::remove_from_cart(&state, product_id).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart emptied unconditionally", body = ApiResponse<serde_json::Value>),
    ),
    tag = "Cart"
)]
pub async fn clear_cart(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(cart_service::clear_cart(&state).await?))
}
