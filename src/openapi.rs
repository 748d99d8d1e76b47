use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// REST handlers and served at `/api-docs/openapi.json`.
///
/// # Tags
/// 1. **Health Check**: liveness and metadata
/// 2. **Products**: catalogue CRUD and search
/// 3. **GraphQL**: read-only query interface
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::health::info,
        crate::routes::products::list_products,
        crate::routes::products::search_products,
        crate::routes::products::get_product,
        crate::routes::products::create_product,
        crate::routes::products::update_product,
        crate::routes::products::delete_product,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::health::InfoResponse,
            crate::models::product::ProductRecord,
            crate::validation::product::Violation,
            crate::validation::product::ViolationKind,
            crate::error::ErrorBody,
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Products", description = "Product catalogue endpoints"),
        (name = "GraphQL", description = "GraphQL API for reading health, info and products")
    ),
    info(
        description = "Product catalogue backend with REST and GraphQL interfaces",
        title = "Product Catalog API",
    )
)]
pub struct ApiDoc;
