use crate::models::{HealthResponse, InfoResponse};
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Liveness probe. Always answers `200 OK` while the process can serve
/// requests.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "service": "backend",
///   "timestamp": 1710084645123
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up())
}

/// # Service Info Endpoint
///
/// Static application metadata, identical for the whole process lifetime.
#[utoipa::path(
    get,
    path = "/api/info",
    responses(
        (status = 200, description = "Application metadata", body = InfoResponse)
    ),
    tag = "Health Check"
)]
#[get("/info")]
pub async fn info() -> impl Responder {
    HttpResponse::Ok().json(InfoResponse::current())
}

/// # Route Configuration
///
/// - `GET /health`: liveness snapshot
/// - `GET /info`: application metadata
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health).service(info);
}
