use chrono::{Duration, Utc};
use rand::RngExt;
use uuid::Uuid;

use crate::domain::repository::{LoginCodeRepository, Mailer, SettingsStore};
use crate::domain::types::{LOGIN_CODE_LEN, LOGIN_CODE_TTL_SECS, LoginCode};
use crate::error::AdminApiError;

/// Charset for generating login codes (uppercase alphanumeric).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draw a code from the thread RNG (OS-seeded CSPRNG). Code predictability
/// is an account-takeover vector, so a time-seeded PRNG is not acceptable here.
pub(crate) fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..LOGIN_CODE_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Mask an email for echoing back to the browser: first two characters of
/// the local part, a fixed mask, domain preserved.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let visible: String = local.chars().take(2).collect();
            format!("{visible}***@{domain}")
        }
        None => "***".to_owned(),
    }
}

#[derive(Debug)]
pub struct IssueLoginCodeOutput {
    /// Masked form of the admin email; the raw address never leaves the server.
    pub masked_email: String,
}

/// Second step of the login flow: generate a fresh code, invalidate every
/// prior code for the address, persist, and mail it out. A resend re-runs
/// this whole sequence — stale codes are never reused.
pub struct IssueLoginCodeUseCase<S, L, M>
where
    S: SettingsStore,
    L: LoginCodeRepository,
    M: Mailer,
{
    pub settings: S,
    pub login_codes: L,
    pub mailer: M,
}

impl<S, L, M> IssueLoginCodeUseCase<S, L, M>
where
    S: SettingsStore,
    L: LoginCodeRepository,
    M: Mailer,
{
    pub async fn execute(&self) -> Result<IssueLoginCodeOutput, AdminApiError> {
        let settings = self.settings.admin_settings().await?;
        let email = settings
            .email
            .filter(|e| !e.is_empty())
            .ok_or(AdminApiError::NotConfigured)?
            .to_lowercase();

        // Single-outstanding-code policy: drop every prior row for this
        // address before inserting the fresh one.
        self.login_codes.delete_for_email(&email).await?;

        let code_str = generate_code();
        let now = Utc::now();
        let code = LoginCode {
            id: Uuid::new_v4(),
            email: email.clone(),
            code: code_str.clone(),
            expires_at: now + Duration::seconds(LOGIN_CODE_TTL_SECS),
            verified: false,
            created_at: now,
        };
        self.login_codes.create(&code).await?;

        // Delivery failure surfaces to the caller; the persisted row stays
        // behind and the resend path regenerates rather than reusing it.
        let minutes = LOGIN_CODE_TTL_SECS / 60;
        let subject = "Your admin login code";
        let body = format!(
            "<p>Your one-time login code is <strong>{code_str}</strong>.</p>\
             <p>It expires in {minutes} minutes. If you did not request it, ignore this message.</p>"
        );
        self.mailer
            .send(&email, subject, &body)
            .await
            .map_err(AdminApiError::Delivery)?;

        Ok(IssueLoginCodeOutput {
            masked_email: mask_email(&email),
        })
    }
}
