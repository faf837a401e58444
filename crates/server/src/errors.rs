use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const FETCH_FAILED: &str = "Failed to fetch contact information";
pub const UPDATE_FAILED: &str = "Failed to update contact information";
pub const UNAUTHORIZED: &str = "Unauthorized";

/// Route-boundary error. Clients only ever see `{"error": "..."}`; internal details stay in the logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("{public}: {detail}")]
    Internal { public: &'static str, detail: String },
}

impl ApiError {
    pub fn internal(public: &'static str, detail: impl ToString) -> Self {
        Self::Internal { public, detail: detail.to_string() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Service-level validation failures surface as 400 with their message.
impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => Self::Validation(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            Self::Validation(msg) => msg,
            Self::Unauthorized => UNAUTHORIZED.to_string(),
            Self::Internal { public, detail } => {
                error!(error = %detail, "{public}");
                public.to_string()
            }
        };
        (status, Json(ErrorBody { error: msg })).into_response()
    }
}
