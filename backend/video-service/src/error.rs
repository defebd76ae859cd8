use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use video_core::{StoreError, ValidationErrors};

pub type Result<T> = std::result::Result<T, AppError>;

/// Field name reported when the body itself cannot be read
pub const BODY_FIELD: &str = "body";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            AppError::Validation(errors) => HttpResponse::build(status).json(errors),
            AppError::NotFound(detail) => {
                tracing::debug!(detail = %detail, "Resource not found");
                HttpResponse::build(status).finish()
            }
            AppError::BadRequest(msg) => {
                HttpResponse::build(status).json(ValidationErrors::single(BODY_FIELD, msg.clone()))
            }
            AppError::Internal(_) => {
                tracing::error!(error = %self, "Request failed");
                HttpResponse::build(status).json(ErrorResponse {
                    error: "Internal server error".to_string(),
                    code: status.as_u16(),
                })
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound(err.to_string()),
            StoreError::DuplicateId(_) => AppError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_not_found_has_empty_body() {
        let response = AppError::from(StoreError::NotFound(3)).error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn test_bad_request_uses_error_list_envelope() {
        let response = AppError::BadRequest("expected value".to_string()).error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "errorsMessages": [{ "message": "expected value", "field": "body" }]
            })
        );
    }

    #[test]
    fn test_duplicate_id_maps_to_internal() {
        let err = AppError::from(StoreError::DuplicateId(1));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
