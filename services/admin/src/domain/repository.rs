#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{AdminSettings, LoginCode};
use crate::error::AdminApiError;

/// Port for the site settings record. Read-only; the auth flow never writes
/// settings. Re-read per request — no process-wide cache.
pub trait SettingsStore: Send + Sync {
    async fn admin_settings(&self) -> Result<AdminSettings, AdminApiError>;
}

/// Repository for one-time login codes (the ledger).
pub trait LoginCodeRepository: Send + Sync {
    /// Insert a new login code.
    async fn create(&self, code: &LoginCode) -> Result<(), AdminApiError>;

    /// Find a live (unverified, unexpired) code by email + code string.
    /// When several rows are live, the most recently created one wins.
    async fn find_live(&self, email: &str, code: &str)
    -> Result<Option<LoginCode>, AdminApiError>;

    /// Mark a code as verified (sets verified = true).
    async fn mark_verified(&self, id: Uuid) -> Result<(), AdminApiError>;

    /// Delete every code for an email, live or not.
    async fn delete_for_email(&self, email: &str) -> Result<u64, AdminApiError>;
}

/// Port for outbound mail. Errors carry transport context and are mapped to
/// the delivery error at the usecase boundary.
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body_html: &str) -> anyhow::Result<()>;
}
