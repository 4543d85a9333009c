use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{AddToCartRequest, CartLineDto, CartView},
        products::{CategoryList, ProductDto, ProductList},
    },
    filter::SortOption,
    models::{CartLine, Product},
    response::{ApiResponse, Meta},
    routes::{cart, health, params, products as product_routes},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        product_routes::list_products,
        product_routes::list_categories,
        product_routes::get_product,
        cart::cart_view,
        cart::add_to_cart,
        cart::remove_from_cart,
        cart::clear_cart,
    ),
    components(
        schemas(
            Product,
            CartLine,
            ProductDto,
            ProductList,
            CategoryList,
            AddToCartRequest,
            CartLineDto,
            CartView,
            SortOption,
            params::ProductQuery,
            Meta,
            ApiResponse<ProductDto>,
            ApiResponse<ProductList>,
            ApiResponse<CategoryList>,
            ApiResponse<CartView>,
            ApiResponse<CartLineDto>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog browsing, filtering and sorting"),
        (name = "Cart", description = "Session cart endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
