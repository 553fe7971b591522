use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Admin auth domain error variants.
///
/// Wrong-password and wrong/expired/reused-code failures each collapse to a
/// single variant with one fixed message, so responses never reveal which
/// case applied.
#[derive(Debug, thiserror::Error)]
pub enum AdminApiError {
    #[error("invalid request")]
    InvalidRequest,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid or expired code")]
    InvalidLoginCode,
    #[error("service is not configured")]
    NotConfigured,
    #[error("failed to send login code")]
    Delivery(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AdminApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidLoginCode => "INVALID_LOGIN_CODE",
            Self::NotConfigured => "NOT_CONFIGURED",
            Self::Delivery(_) => "DELIVERY_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AdminApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::InvalidLoginCode => StatusCode::UNAUTHORIZED,
            Self::NotConfigured | Self::Delivery(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        // Log 500s only — the TraceLayer already records method/uri/status for all
        // requests, and 4xx here are expected client errors. The 5xx variants carry
        // a source chain that must be logged to keep the root cause traceable.
        match &self {
            Self::Delivery(e) => tracing::error!(error = %e, kind = "DELIVERY_FAILED", "login code delivery failed"),
            Self::Internal(e) => tracing::error!(error = %e, kind = "INTERNAL", "internal error"),
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
