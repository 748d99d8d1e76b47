/// # Health and Service Metadata
///
/// Response shapes for the liveness (`/api/health`) and build metadata
/// (`/api/info`) endpoints.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "service": "backend",
///   "timestamp": 1710084645123
/// }
/// ```
pub mod health;

/// Catalogue item data-transfer shape.
pub mod product;

pub use health::{HealthResponse, InfoResponse};
pub use product::ProductRecord;
