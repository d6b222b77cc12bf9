use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Session not found.")]
    SessionNotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Cart is empty.")]
    EmptyCart,

    #[error("Upstream error: {detail}")]
    Upstream {
        /// HTTP status the upstream responded with, if it responded at all.
        status: Option<u16>,
        detail: String,
    },

    #[error("Billing API returned status {status}")]
    Billing { status: u16, body: serde_json::Value },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::SessionNotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::EmptyCart => StatusCode::BAD_REQUEST,
            // Forward the upstream status where we have a usable one.
            Self::Upstream { status, .. } => status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            Self::Billing { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Self::Billing {
                status: billing_status,
                body,
            } => Json(json!({
                "error": self.to_string(),
                "status": status.as_u16(),
                "billing_status": billing_status,
                "billing_response": body,
            })),
            _ => Json(json!({
                "error": self.to_string(),
                "status": status.as_u16(),
            })),
        };

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
