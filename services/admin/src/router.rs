use axum::{
    Router,
    http::StatusCode,
    routing::{delete, get, post},
};
use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    login::verify_password,
    login_code::send_login_code,
    token::{check_session, create_token, revoke_token},
};
use crate::state::AppState;

/// Handler for `GET /healthz` — liveness check.
async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness check.
async fn readyz() -> StatusCode {
    StatusCode::OK
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Login flow: password, then emailed code, then token
        .route("/admin/auth/login", post(verify_password))
        .route("/admin/auth/code", post(send_login_code))
        .route("/admin/auth/token", post(create_token))
        // Admin-only (gated by AdminIdentity)
        .route("/admin/auth/token", get(check_session))
        .route("/admin/auth/token", delete(revoke_token))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
