use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Auth-relevant slice of the site settings record. Both fields are
/// provisioned out-of-band; a missing field fails the step that needs it
/// with a configuration error, not an authentication error.
#[derive(Debug, Clone, Default)]
pub struct AdminSettings {
    /// Notification address login codes are sent to.
    pub email: Option<String>,
    /// Argon2 PHC-string hash of the admin password.
    pub password_hash: Option<String>,
}

/// One-time login code mailed to the admin during the second auth step.
#[derive(Debug, Clone)]
pub struct LoginCode {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl LoginCode {
    /// Live means still eligible for verification: unverified and unexpired.
    pub fn is_live(&self) -> bool {
        !self.verified && self.expires_at > Utc::now()
    }
}

/// Login code length in characters.
pub const LOGIN_CODE_LEN: usize = 6;

/// Login code time-to-live in seconds.
pub const LOGIN_CODE_TTL_SECS: i64 = 300;
