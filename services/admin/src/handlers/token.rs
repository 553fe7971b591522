use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use folio_auth_types::{
    cookie::{clear_admin_token_cookie, set_admin_token_cookie},
    gate::AdminIdentity,
};

use crate::error::AdminApiError;
use crate::state::AppState;
use crate::usecase::token::{VerifyLoginCodeInput, VerifyLoginCodeUseCase};

// ── POST /admin/auth/token ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyCodeRequest {
    pub otp: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeResponse {
    pub success: bool,
    pub token: String,
    pub expires_in: u64,
}

/// Token is delivered twice on purpose: in the body for bearer-header
/// clients and as the `admin_token` cookie for browser navigation.
pub async fn create_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyCodeRequest>,
) -> Result<impl IntoResponse, AdminApiError> {
    let usecase = VerifyLoginCodeUseCase {
        settings: state.settings_store(),
        login_codes: state.login_codes(),
        jwt_secret: state.jwt_secret.clone(),
    };

    let out = usecase
        .execute(VerifyLoginCodeInput { code: body.otp })
        .await?;

    let jar = set_admin_token_cookie(jar, out.token.clone());

    Ok((
        StatusCode::OK,
        jar,
        Json(VerifyCodeResponse {
            success: true,
            token: out.token,
            expires_in: out.expires_in,
        }),
    ))
}

// ── GET /admin/auth/token ─────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub admin: bool,
    pub email: String,
    pub expires_at: u64,
}

pub async fn check_session(identity: AdminIdentity) -> Json<SessionResponse> {
    Json(SessionResponse {
        admin: true,
        email: identity.email,
        expires_at: identity.expires_at,
    })
}

// ── DELETE /admin/auth/token ──────────────────────────────────────────────────

/// Clears the cookie only; the bearer token itself stays valid until `exp`.
/// Global revocation is rotating the signing secret.
pub async fn revoke_token(_identity: AdminIdentity, jar: CookieJar) -> impl IntoResponse {
    (StatusCode::NO_CONTENT, clear_admin_token_cookie(jar))
}
