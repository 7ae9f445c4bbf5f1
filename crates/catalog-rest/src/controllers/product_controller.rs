//! Product controller.

use crate::{
    extractors::ValidatedJson,
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use catalog_core::{CatalogError, ErrorResponse, ProductId};
use catalog_service::ProductDto;
use tracing::debug;

/// Creates the product router, mounted under `/api/product`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product).put(update_product).delete(delete_product))
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/api/product",
    tag = "products",
    request_body = ProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product", body = ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ProductDto>,
) -> Result<(StatusCode, Json<ProductDto>), AppError> {
    debug!("Create product request: {}", dto.name);

    let response = state.product_service.create_product(dto).await?;
    Ok(created(response))
}

/// Get a product by ID.
#[utoipa::path(
    get,
    path = "/api/product/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ProductDto> {
    debug!("Get product request: {}", id);

    let product_id = parse_product_id(&id)?;
    let response = state.product_service.get_product(product_id).await?;
    ok(response)
}

/// List all products.
#[utoipa::path(
    get,
    path = "/api/product",
    tag = "products",
    responses(
        (status = 200, description = "All products, ordered by id", body = [ProductDto])
    )
)]
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Vec<ProductDto>> {
    debug!("List products request");

    let response = state.product_service.list_products().await?;
    ok(response)
}

/// Replace a product's name and price.
///
/// The id in the path wins over any id in the body.
#[utoipa::path(
    put,
    path = "/api/product/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid product or malformed id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<ProductDto>,
) -> ApiResult<ProductDto> {
    debug!("Update product request: {}", id);

    let product_id = parse_product_id(&id)?;
    let response = state
        .product_service
        .update_product(dto.with_id(product_id))
        .await?;
    ok(response)
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/api/product/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted, or never existed"),
        (status = 400, description = "Malformed id", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete product request: {}", id);

    let product_id = parse_product_id(&id)?;
    state.product_service.delete_product(product_id).await?;
    Ok(no_content())
}

/// Helper to parse product ID from path parameter.
fn parse_product_id(id: &str) -> Result<ProductId, AppError> {
    ProductId::parse(id)
        .map_err(|_| AppError(CatalogError::Validation(format!("Invalid product ID: {}", id))))
}
