use crate::models::health::{HealthResponse, InfoResponse};
use async_graphql::{Context, Object, Result};

/// GraphQL view of a [`HealthResponse`].
#[derive(Debug)]
pub struct Health {
    pub status: String,
    pub service: String,
    pub timestamp: i64,
}

impl From<HealthResponse> for Health {
    fn from(response: HealthResponse) -> Self {
        Self {
            status: response.status,
            service: response.service,
            timestamp: response.timestamp,
        }
    }
}

#[Object]
impl Health {
    /// `"UP"` while the service can answer.
    async fn status(&self) -> &str {
        &self.status
    }

    async fn service(&self) -> &str {
        &self.service
    }

    /// Capture time in milliseconds since the Unix epoch
    async fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

/// GraphQL view of an [`InfoResponse`].
#[derive(Debug)]
pub struct Info(InfoResponse);

#[Object]
impl Info {
    async fn application(&self) -> &str {
        &self.0.application
    }

    async fn version(&self) -> &str {
        &self.0.version
    }

    async fn description(&self) -> &str {
        &self.0.description
    }
}

/// Health and metadata entry points, mirroring `/api/health` and `/api/info`.
#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    async fn health(&self, _ctx: &Context<'_>) -> Result<Health> {
        Ok(Health::from(HealthResponse::up()))
    }

    async fn info(&self) -> Info {
        Info(InfoResponse::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::{EmptyMutation, EmptySubscription, Schema};

    fn schema() -> Schema<HealthQuery, EmptyMutation, EmptySubscription> {
        Schema::build(
            HealthQuery::default(),
            EmptyMutation::default(),
            EmptySubscription::default(),
        )
        .finish()
    }

    #[test]
    fn test_health_from_health_response() {
        let response = HealthResponse {
            status: "UP".to_string(),
            service: "backend".to_string(),
            timestamp: 1_710_084_645_123,
        };

        let health = Health::from(response);

        assert_eq!(health.status, "UP");
        assert_eq!(health.service, "backend");
        assert_eq!(health.timestamp, 1_710_084_645_123);
    }

    #[tokio::test]
    async fn test_health_query_resolver() {
        let response = schema()
            .execute("query { health { status service timestamp } }")
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["health"]["status"], "UP");
        assert_eq!(data["health"]["service"], "backend");
        assert!(data["health"]["timestamp"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_info_query_resolver() {
        let response = schema()
            .execute("{ info { application version description } }")
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        let expected = InfoResponse::current();
        assert_eq!(data["info"]["application"], expected.application);
        assert_eq!(data["info"]["version"], expected.version);
        assert_eq!(data["info"]["description"], expected.description);
    }
}
