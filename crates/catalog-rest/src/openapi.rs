//! OpenAPI documentation configuration.
//!
//! The generated document is served as JSON at `/api-docs/openapi.json`.

use crate::controllers::HealthResponse;
use catalog_core::{ErrorResponse, FieldError};
use catalog_service::ProductDto;
use utoipa::OpenApi;

/// OpenAPI documentation for the product catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog API",
        version = "1.0.0",
        description = "CRUD API for the product catalog",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Product endpoints
        crate::controllers::product_controller::create_product,
        crate::controllers::product_controller::get_product,
        crate::controllers::product_controller::list_products,
        crate::controllers::product_controller::update_product,
        crate::controllers::product_controller::delete_product,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ProductDto,
            ErrorResponse,
            FieldError,
            HealthResponse,
        )
    ),
    tags(
        (name = "products", description = "Product catalog endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
