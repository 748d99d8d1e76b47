use actix_web::web;

/// `GET /health` and `GET /info`.
pub mod health;

/// # Product Endpoints
///
/// CRUD and name search over the product catalogue. Every inbound record
/// is validated before it reaches the repository.
///
/// ```text
/// GET    /api/products
/// GET    /api/products/search?name=...
/// GET    /api/products/{id}
/// POST   /api/products
/// PUT    /api/products/{id}
/// DELETE /api/products/{id}
/// ```
pub mod products;

/// GraphQL execution and playground endpoints.
pub mod graphql;

/// # API Route Configuration
///
/// Mounts every endpoint under the `/api` base path.
///
/// ## Example Endpoints
///
/// ```text
/// GET  /api/health   - Service health status
/// GET  /api/info     - Application metadata
/// GET  /api/products - Product listing
/// POST /api/graphql  - GraphQL queries
/// ```
///
/// Expects `web::Data<dyn ProductRepository>` and `web::Data<AppSchema>`
/// to be registered on the `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::configure_routes)
            .configure(products::configure_routes)
            .configure(graphql::configure_routes),
    );
}
