use crate::{
    dto::products::{CategoryList, ProductDto, ProductList},
    error::{AppError, AppResult},
    filter,
    response::{ApiResponse, Meta},
    routes::params::ProductQuery,
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let filter_state = query.into_filter(&state.catalog);
    let selected = filter::apply(&state.catalog, &filter_state);

    tracing::debug!(
        shown = selected.len(),
        total = state.catalog.len(),
        categories = ?filter_state.categories,
        ceiling = %filter_state.ceiling,
        sort = ?filter_state.sort,
        "catalog projected"
    );

    let items: Vec<ProductDto> = selected.into_iter().map(ProductDto::from).collect();
    let meta = Meta::new(
        items.len() as i64,
        state.catalog.len() as i64,
        state.catalog.max_price(),
    );
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: u32) -> AppResult<ApiResponse<ProductDto>> {
    let product = match state.catalog.get(id) {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Product", ProductDto::from(product), None))
}

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items = state.catalog.categories().to_vec();
    let meta = Meta::new(
        items.len() as i64,
        state.catalog.len() as i64,
        state.catalog.max_price(),
    );
    Ok(ApiResponse::success("Categories", CategoryList { items }, Some(meta)))
}
