// HTTP error mapping
// Decision: ViewCapExceeded keeps the 401 status existing clients expect;
// the `kind` field tells it apart from Unauthenticated

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gazette_core::GateError;
use thiserror::Error;

use super::common::ErrorResponse;

/// Errors returned by route handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Gate(#[from] GateError),

    /// The session cookie could not be written
    #[error("Session error: {0}")]
    Session(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Gate(GateError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Gate(GateError::Unauthenticated(_)) => StatusCode::UNAUTHORIZED,
            ApiError::Gate(GateError::ViewCapExceeded) => StatusCode::UNAUTHORIZED,
            ApiError::Gate(GateError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Gate(GateError::Store(_)) | ApiError::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Gate(GateError::Store(_)) | ApiError::Session(_) => {
                ErrorResponse::new("Internal server error", "internal")
            }
            ApiError::Gate(e) => ErrorResponse::new(e.to_string(), e.kind()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:#}", self);
        }
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(GateError::article_not_found()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(GateError::unauthorized()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(GateError::ViewCapExceeded).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(GateError::validation("bad body")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(GateError::from(anyhow::anyhow!("db down"))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_body_distinguishes_cap_from_unauthenticated() {
        let cap = ApiError::from(GateError::ViewCapExceeded).body();
        assert_eq!(cap.error, "Maximum pageview limit reached");
        assert_eq!(cap.kind, "view_cap_exceeded");

        let unauth = ApiError::from(GateError::unauthorized()).body();
        assert_eq!(unauth.error, "Unauthorized");
        assert_eq!(unauth.kind, "unauthenticated");
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let body = ApiError::from(GateError::from(anyhow::anyhow!("password=hunter2"))).body();
        assert_eq!(body.error, "Internal server error");
        assert_eq!(body.kind, "internal");
    }
}
