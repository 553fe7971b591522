use jsonwebtoken::{EncodingKey, Header, encode};
use std::time::{SystemTime, UNIX_EPOCH};

use folio_auth_types::token::{ADMIN_TOKEN_TTL_SECS, AdminClaims};

use crate::domain::repository::{LoginCodeRepository, SettingsStore};
use crate::domain::types::LOGIN_CODE_LEN;
use crate::error::AdminApiError;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Mint the admin session token: HS256, `admin: true`, valid for exactly
/// four hours. Neither the password nor the login code ever enters the
/// claims.
pub fn issue_admin_token(email: &str, secret: &str) -> Result<(String, u64), AdminApiError> {
    let iat = now_secs();
    let exp = iat + ADMIN_TOKEN_TTL_SECS;
    let claims = AdminClaims {
        sub: email.to_owned(),
        admin: true,
        iat,
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AdminApiError::Internal(e.into()))?;
    Ok((token, exp))
}

pub struct VerifyLoginCodeInput {
    pub code: String,
}

#[derive(Debug)]
pub struct VerifyLoginCodeOutput {
    pub token: String,
    /// Seconds until the token expires; constant by construction.
    pub expires_in: u64,
}

/// Final step of the login flow: check the submitted code against the
/// ledger, burn it, purge the ledger for this address, and mint the session
/// token. Wrong, expired, and already-used codes are indistinguishable to
/// the caller.
pub struct VerifyLoginCodeUseCase<S: SettingsStore, L: LoginCodeRepository> {
    pub settings: S,
    pub login_codes: L,
    pub jwt_secret: String,
}

impl<S: SettingsStore, L: LoginCodeRepository> VerifyLoginCodeUseCase<S, L> {
    pub async fn execute(
        &self,
        input: VerifyLoginCodeInput,
    ) -> Result<VerifyLoginCodeOutput, AdminApiError> {
        if input.code.len() != LOGIN_CODE_LEN {
            return Err(AdminApiError::InvalidRequest);
        }
        // Codes are generated uppercase; fold the submission to match.
        let code = input.code.to_ascii_uppercase();

        let settings = self.settings.admin_settings().await?;
        let email = settings
            .email
            .filter(|e| !e.is_empty())
            .ok_or(AdminApiError::NotConfigured)?
            .to_lowercase();

        let row = self
            .login_codes
            .find_live(&email, &code)
            .await?
            .ok_or(AdminApiError::InvalidLoginCode)?;

        // Burn before issuing: a concurrent attempt against the same row must
        // miss the live lookup from here on.
        self.login_codes.mark_verified(row.id).await?;
        self.login_codes.delete_for_email(&email).await?;

        let (token, _exp) = issue_admin_token(&email, &self.jwt_secret)?;

        Ok(VerifyLoginCodeOutput {
            token,
            expires_in: ADMIN_TOKEN_TTL_SECS,
        })
    }
}
