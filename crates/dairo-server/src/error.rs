//! Maps [`DairoError`] onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dairo_core::DairoError;
use serde::{Deserialize, Serialize};

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned by HTTP handlers.
#[derive(Debug)]
pub struct ApiError(pub DairoError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DairoError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DairoError::Config(_) | DairoError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DairoError::Upstream { status, .. } => status
                .and_then(|code| StatusCode::from_u16(code).ok())
                .filter(|code| code.is_client_error() || code.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    /// Message shown to the client. Internal details stay in the logs.
    pub fn message(&self) -> String {
        match &self.0 {
            DairoError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<DairoError> for ApiError {
    fn from(err: DairoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("[ApiError] {}: {}", status, self.0);
        } else {
            tracing::warn!("[ApiError] {}: {}", status, self.0);
        }
        let body = ErrorBody {
            error: self.message(),
        };
        (status, Json(body)).into_response()
    }
}
