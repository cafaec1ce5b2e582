use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::services::catalog::CatalogError;

#[derive(Debug)]
pub enum ServiceError {
    NotFound(String),
    UpstreamUnavailable(String),
    IntegrityError(String),
    InternalServerError(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ServiceError::UpstreamUnavailable(msg) => write!(f, "Upstream Unavailable: {}", msg),
            ServiceError::IntegrityError(msg) => write!(f, "Integrity Error: {}", msg),
            ServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::NotFound(msg) => HttpResponse::NotFound().json(serde_json::json!({
                "error": "Not Found",
                "message": msg
            })),
            ServiceError::UpstreamUnavailable(msg) => {
                // Retryable by the caller; this service does not retry.
                HttpResponse::ServiceUnavailable().json(serde_json::json!({
                    "error": "Upstream Unavailable",
                    "message": msg
                }))
            }
            ServiceError::IntegrityError(msg) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Integrity Error",
                    "message": msg
                }))
            }
            ServiceError::InternalServerError(msg) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Internal Server Error",
                    "message": msg
                }))
            }
        }
    }
}

impl From<CatalogError> for ServiceError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::SpaceNotFound(_) => ServiceError::NotFound(err.to_string()),
            CatalogError::UpstreamUnavailable(_) => {
                ServiceError::UpstreamUnavailable(err.to_string())
            }
            CatalogError::DuplicateConnectorId(_) => ServiceError::IntegrityError(err.to_string()),
        }
    }
}
