use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use utoipa::ToSchema;

/// Service name reported by every health snapshot.
pub const SERVICE_NAME: &str = "backend";

/// Reported by `/api/info`; existing clients see this exact string.
const APPLICATION_NAME: &str = "Spring Boot Backend";
const APPLICATION_DESCRIPTION: &str = "Docker & Kubernetes Lernprojekt";

/// Highest timestamp handed out so far, so wall-clock steps backwards
/// never surface as a decreasing `timestamp`.
static LAST_TIMESTAMP_MILLIS: AtomicI64 = AtomicI64::new(i64::MIN);

/// # Health Status Response
///
/// Point-in-time liveness snapshot, created fresh on every query.
///
/// ## Fields
/// - `status`: always `"UP"` while the process can answer
/// - `service`: service identifier (`"backend"`)
/// - `timestamp`: capture time in milliseconds since the Unix epoch
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "service": "backend",
///   "timestamp": 1710084645123
/// }
/// ```
#[derive(Serialize, Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: i64,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            service: SERVICE_NAME.to_string(),
            timestamp: monotonic_now_millis(),
        }
    }
}

fn monotonic_now_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let previous = LAST_TIMESTAMP_MILLIS.fetch_max(now, Ordering::AcqRel);
    now.max(previous)
}

/// # Service Metadata
///
/// Static description of the running build. Every call to
/// [`InfoResponse::current`] yields the same value.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct InfoResponse {
    pub application: String,
    pub version: String,
    pub description: String,
}

impl InfoResponse {
    pub fn current() -> Self {
        Self {
            application: APPLICATION_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: APPLICATION_DESCRIPTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_up() {
        let response = HealthResponse::up();

        assert_eq!(response.status, "UP");
        assert_eq!(response.service, "backend");

        // Millisecond precision, not seconds
        let now = Utc::now().timestamp_millis();
        assert!((now - response.timestamp).abs() < 60_000);
    }

    #[test]
    fn test_health_timestamps_never_decrease() {
        let mut previous = HealthResponse::up().timestamp;
        for _ in 0..1000 {
            let current = HealthResponse::up().timestamp;
            assert!(current >= previous, "{current} < {previous}");
            previous = current;
        }
    }

    #[test]
    fn test_health_response_json_shape() {
        let json = serde_json::to_value(HealthResponse::up()).unwrap();

        assert_eq!(json["status"], "UP");
        assert_eq!(json["service"], "backend");
        assert!(json["timestamp"].is_i64());
    }

    #[test]
    fn test_info_is_constant() {
        let first = InfoResponse::current();
        let second = InfoResponse::current();

        assert_eq!(first, second);
        assert_eq!(first.application, "Spring Boot Backend");
        assert_eq!(first.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(first.description, "Docker & Kubernetes Lernprojekt");
    }
}
