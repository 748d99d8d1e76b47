use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use catalog_backend::config::AppConfig;
use catalog_backend::graphql::schema::create_schema;
use catalog_backend::openapi::ApiDoc;
use catalog_backend::{repository, telemetry};
use std::io;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Product Catalog Backend Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - REST endpoints under `/api` (health, info, products)
/// - GraphQL endpoint and playground under `/api`
/// - Swagger UI for API documentation
///
/// # Endpoints
/// - Health: `/api/health`, `/api/info`
/// - GraphQL: `/api/graphql`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// Read from the environment (and `.env`, if present); see [`AppConfig`].
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    telemetry::init_tracing(&config.log_filter);

    let repository = repository::from_config(&config)
        .await
        .map_err(io::Error::other)?;
    let schema = create_schema(repository.clone());

    tracing::info!(host = %config.host, port = config.port, "starting backend");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .app_data(Data::from(repository.clone()))
            .app_data(Data::new(schema.clone()))
            .configure(catalog_backend::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
