use crate::graphql::handlers;
use actix_web::web;

/// Mounts the read-only catalogue view: `health`, `info`, `products`,
/// `product(id)` and `searchProducts(name)` are served at `POST /graphql`,
/// with the playground at `GET /playground`. Writes stay on the REST routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/graphql").route(web::post().to(handlers::graphql_handler)))
        .service(web::resource("/playground").route(web::get().to(handlers::graphql_playground)));
}
