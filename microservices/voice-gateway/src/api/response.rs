//! Error responses with uniform bodies

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use webcall_core::WebcallError;

/// Body returned when a request fails
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: &'static str,
    pub error: String,
}

/// Handler error; renders a [`WebcallError`] as a JSON failure
#[derive(Debug)]
pub struct ApiError(pub WebcallError);

impl From<WebcallError> for ApiError {
    fn from(err: WebcallError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        tracing::error!(code = self.0.error_code(), error = %self.0, "Request failed");

        let body = ErrorResponse {
            success: false,
            code: self.0.error_code(),
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
