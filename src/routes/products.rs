use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::products::{CategoryList, ProductDto, ProductList},
    error::AppResult,
    filter::SortOption,
    response::ApiResponse,
    routes::params::ProductQuery,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/categories", get(list_categories))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("categories" = Option<String>, Query, description = "Comma-separated category labels; absent or empty selects every category"),
        ("max_price" = Option<String>, Query, description = "Inclusive price ceiling; defaults to the catalog maximum, non-numeric input is treated as 0"),
        ("sort" = Option<SortOption>, Query, description = "priceAsc | priceDesc | nameAsc | nameDesc; unset keeps catalog order"),
    ),
    responses(
        (status = 200, description = "Filtered, sorted products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    Ok(Json(product_service::list_products(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/products/categories",
    responses(
        (status = 200, description = "Distinct categories in order of first appearance", body = ApiResponse<CategoryList>)
    ),
    tag = "Products"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoryList>>> {
    Ok(Json(product_service::list_categories(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = u32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product detail with placeholders filled", body = ApiResponse<ProductDto>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<ApiResponse<ProductDto>>> {
    Ok(Json(product_service::get_product(&state, id).await?))
}
