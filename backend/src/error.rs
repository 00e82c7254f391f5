//! Error taxonomy for the HTTP surface.
//!
//! Every handler returns `Result<_, ApiError>`; actix renders the error as a
//! JSON `{ "error": "..." }` envelope with the matching status code.

use crate::store::StoreError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::ErrorResponse;
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// Input rejected by the content filter.
    #[error("{0}")]
    ContentPolicy(String),

    /// No session on a route that needs one.
    #[error("Unauthorized")]
    Unauthorized,

    /// Session present but not allowed to touch the record.
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    /// The store refused a write that would break name uniqueness.
    #[error("{0}")]
    Conflict(String),

    #[error("{context}")]
    Storage {
        context: &'static str,
        #[source]
        source: StoreError,
    },

    /// A remote collaborator (webhook) failed.
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    /// Adapter for `map_err` on store calls. Duplicate names become
    /// `Conflict`; anything else is a 500 carrying `context` as its message.
    pub fn storage(context: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |source| match source {
            StoreError::Duplicate(name) => {
                ApiError::Conflict(format!("A location named '{name}' already exists"))
            }
            source => ApiError::Storage { context, source },
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::ContentPolicy(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Storage { .. } | ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Storage { context, source } = self {
            error!("{context}: {source}");
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn renders_json_envelope() {
        let (status, body) = body_of(ApiError::NotFound("Location not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Location not found");

        let (status, body) = body_of(ApiError::Unauthorized).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "Unauthorized");
    }

    #[actix_web::test]
    async fn duplicate_store_errors_become_conflicts() {
        let err = ApiError::storage("Failed to create location")(StoreError::Duplicate(
            "Campus Library".into(),
        ));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body.error.contains("Campus Library"));
    }

    #[actix_web::test]
    async fn storage_errors_hide_driver_details() {
        let err = ApiError::storage("Failed to fetch locations")(StoreError::Poisoned);
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to fetch locations");
    }
}
