use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use tokio::task;

use crate::domain::repository::SettingsStore;
use crate::error::AdminApiError;

pub struct VerifyPasswordInput {
    pub password: String,
}

/// First step of the admin login flow: compare the submitted password
/// against the stored argon2 hash. There is exactly one account, so every
/// mismatch is the same generic rejection.
pub struct VerifyPasswordUseCase<S: SettingsStore> {
    pub settings: S,
}

impl<S: SettingsStore> VerifyPasswordUseCase<S> {
    pub async fn execute(&self, input: VerifyPasswordInput) -> Result<(), AdminApiError> {
        if input.password.is_empty() {
            return Err(AdminApiError::InvalidRequest);
        }

        let settings = self.settings.admin_settings().await?;
        let stored_hash = settings
            .password_hash
            .filter(|h| !h.is_empty())
            .ok_or(AdminApiError::NotConfigured)?;

        // Argon2 verification is CPU-bound; run it off the async runtime.
        let password = input.password;
        let accepted = task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&stored_hash)
                .map_err(|e| anyhow::anyhow!("stored password hash is malformed: {e}"))?;
            Ok::<bool, anyhow::Error>(
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok(),
            )
        })
        .await
        .map_err(|e| AdminApiError::Internal(anyhow::anyhow!("verification task panicked: {e}")))?
        .map_err(AdminApiError::Internal)?;

        if accepted {
            Ok(())
        } else {
            Err(AdminApiError::InvalidCredentials)
        }
    }
}
