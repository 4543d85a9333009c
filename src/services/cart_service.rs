use rust_decimal::Decimal;

use crate::{
    dto::cart::{AddToCartRequest, CartLineDto, CartView},
    dto::products::peso,
    error::{AppError, AppResult},
    mirror::spawn_mirror_write,
    models::CartLine,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Totals derive from the same snapshot as the listed lines.
pub async fn view_cart(state: &AppState) -> AppResult<ApiResponse<CartView>> {
    let items = state.cart.items();
    let total: Decimal = items.iter().map(CartLine::line_total).sum();
    let count = items
        .iter()
        .fold(0u32, |acc, l| acc.saturating_add(l.quantity));

    let view = CartView {
        items: items.into_iter().map(CartLineDto::from).collect(),
        count,
        total,
        display_total: peso(total),
    };
    Ok(ApiResponse::success("OK", view, None))
}

pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartLineDto>> {
    let quantity = payload.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }
    let product = match state.catalog.get(payload.product_id) {
        Some(p) => p,
        None => return Err(AppError::BadRequest("product not found".to_string())),
    };

    let line = state.cart.add(product, quantity);
    tracing::debug!(
        product_id = product.id,
        quantity = line.quantity,
        "added to cart"
    );
    mirror_cart(state);

    Ok(ApiResponse::success(
        "Added to cart",
        CartLineDto::from(line),
        None,
    ))
}

/// Removing a product that is not in the cart is a no-op, not an error.
pub async fn remove_from_cart(
    state: &AppState,
    product_id: u32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let removed = state.cart.remove(product_id);
    tracing::debug!(product_id, removed, "remove from cart");
    if removed {
        mirror_cart(state);
    }

    let message = if removed { "Removed from cart" } else { "Not in cart" };
    Ok(ApiResponse::success(
        message,
        serde_json::json!({ "removed": removed }),
        Some(Meta::empty()),
    ))
}

pub async fn clear_cart(state: &AppState) -> AppResult<ApiResponse<serde_json::Value>> {
    let cleared = state.cart.clear();
    tracing::debug!(lines = cleared, "cart cleared");
    mirror_cart(state);

    Ok(ApiResponse::success(
        "Cart cleared",
        serde_json::json!({ "cleared": cleared }),
        Some(Meta::empty()),
    ))
}

// The mirror is a best-effort side channel: detached from the mutation and
// skipped entirely when not configured.
fn mirror_cart(state: &AppState) {
    if let Some(mirror) = &state.mirror {
        spawn_mirror_write(mirror, state.cart.items());
    }
}
