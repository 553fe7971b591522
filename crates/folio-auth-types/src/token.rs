//! Admin session-token validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(any(feature = "USE_ONLY_IN_ADMIN_API", test))]
use serde::Serialize;

/// Session lifetime in seconds (4 hours). Also the cookie Max-Age.
pub const ADMIN_TOKEN_TTL_SECS: u64 = 14_400;

/// Admin identity extracted from a validated session token.
#[derive(Debug, Clone)]
pub struct AdminTokenInfo {
    /// Admin email the token was issued for (the `sub` claim).
    pub email: String,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub expires_at: u64,
}

/// Errors returned by [`validate_admin_token`].
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("missing admin assertion")]
    NotAdmin,
}

/// JWT claims payload shared by token issuance (admin service) and validation
/// (the authorization gate).
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | admin email the token was issued for |
/// | `admin` | custom | must be `true`; the only capability the system knows |
/// | `iat` | `iat` | issuance timestamp, kept for audit |
/// | `exp` | `exp` | seconds since epoch; token dies at exactly this instant |
///
/// [`Deserialize`] is always available — every consumer validates tokens.
/// [`Serialize`] requires the **`USE_ONLY_IN_ADMIN_API`** cargo feature; only
/// the admin service enables it because it is the sole token issuer.
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "USE_ONLY_IN_ADMIN_API", test), derive(Serialize))]
pub struct AdminClaims {
    /// Admin email.
    pub sub: String,
    /// Admin capability assertion.
    pub admin: bool,
    /// Issuance timestamp (seconds since UNIX epoch).
    pub iat: u64,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

/// Validate a session token and return the admin identity it asserts.
///
/// Validation: HS256, `exp` checked with **zero leeway** (a token issued for
/// 14 400 s is rejected one second past that), required claims `exp` + `sub`,
/// and the `admin` claim must be `true`.
pub fn validate_admin_token(token: &str, secret: &str) -> Result<AdminTokenInfo, TokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    if !data.claims.admin {
        return Err(TokenError::NotAdmin);
    }

    Ok(AdminTokenInfo {
        email: data.claims.sub,
        expires_at: data.claims.exp,
    })
}
