use crate::repository::RepositoryError;
use crate::validation::{ValidationErrors, Violation};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// JSON body of every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("product record failed validation: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("product {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_FAILED",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Repository(_) => "DATABASE_ERROR",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(errors) => ErrorBody {
                error: self.code(),
                message: "Product record failed validation".to_string(),
                violations: Some(errors.violations().to_vec()),
            },
            ApiError::Repository(err) => {
                tracing::error!(error = %err, "product repository failure");
                ErrorBody {
                    error: self.code(),
                    message: "Product storage is unavailable".to_string(),
                    violations: None,
                }
            }
            ApiError::NotFound(_) => ErrorBody {
                error: self.code(),
                message: self.to_string(),
                violations: None,
            },
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
