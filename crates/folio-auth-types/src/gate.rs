//! Authorization gate for admin-only routes.

use axum::extract::{FromRef, FromRequestParts};
use axum_extra::extract::CookieJar;
use http::StatusCode;
use http::request::Parts;

use crate::cookie::ADMIN_TOKEN;
use crate::token::validate_admin_token;

/// Signing secret for admin session tokens, pulled out of the application
/// state via [`FromRef`] so the extractor works against any state type.
#[derive(Debug, Clone)]
pub struct AdminTokenSecret(pub String);

/// Admin identity proven by a valid session token.
///
/// Extraction order: `Authorization: Bearer <token>` header, else the
/// `admin_token` cookie. Missing, malformed, expired, and wrong-signature
/// tokens all collapse to a bare 401 before the wrapped handler runs.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub email: String,
    pub expires_at: u64,
}

impl<S> FromRequestParts<S> for AdminIdentity
where
    S: Send + Sync,
    AdminTokenSecret: FromRef<S>,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = AdminTokenSecret::from_ref(state);

        let bearer = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::to_owned);

        let cookie = CookieJar::from_headers(&parts.headers)
            .get(ADMIN_TOKEN)
            .map(|c| c.value().to_owned());

        async move {
            let token = bearer.or(cookie).ok_or(StatusCode::UNAUTHORIZED)?;
            let info =
                validate_admin_token(&token, &secret.0).map_err(|_| StatusCode::UNAUTHORIZED)?;
            Ok(Self {
                email: info.email,
                expires_at: info.expires_at,
            })
        }
    }
}
