use std::sync::{Arc, Mutex};

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use uuid::Uuid;

use folio_admin::domain::repository::{LoginCodeRepository, Mailer, SettingsStore};
use folio_admin::domain::types::{AdminSettings, LoginCode};
use folio_admin::error::AdminApiError;

pub const TEST_EMAIL: &str = "admin@example.com";
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

pub fn hash_password(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

// ── MockSettingsStore ────────────────────────────────────────────────────────

pub struct MockSettingsStore {
    pub settings: AdminSettings,
}

impl MockSettingsStore {
    pub fn new(email: Option<&str>, password_hash: Option<String>) -> Self {
        Self {
            settings: AdminSettings {
                email: email.map(str::to_owned),
                password_hash,
            },
        }
    }

    pub fn with_email() -> Self {
        Self::new(Some(TEST_EMAIL), None)
    }

    pub fn unconfigured() -> Self {
        Self::new(None, None)
    }
}

impl SettingsStore for MockSettingsStore {
    async fn admin_settings(&self) -> Result<AdminSettings, AdminApiError> {
        Ok(self.settings.clone())
    }
}

// ── MockLoginCodeRepo ────────────────────────────────────────────────────────

pub struct MockLoginCodeRepo {
    pub codes: Arc<Mutex<Vec<LoginCode>>>,
}

impl MockLoginCodeRepo {
    pub fn new(codes: Vec<LoginCode>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the internal code list for post-execution inspection.
    pub fn codes_handle(&self) -> Arc<Mutex<Vec<LoginCode>>> {
        Arc::clone(&self.codes)
    }
}

impl LoginCodeRepository for MockLoginCodeRepo {
    async fn create(&self, code: &LoginCode) -> Result<(), AdminApiError> {
        self.codes.lock().unwrap().push(code.clone());
        Ok(())
    }

    async fn find_live(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<LoginCode>, AdminApiError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.email == email && c.code == code && c.is_live())
            .max_by_key(|c| c.created_at)
            .cloned())
    }

    async fn mark_verified(&self, id: Uuid) -> Result<(), AdminApiError> {
        let mut codes = self.codes.lock().unwrap();
        if let Some(c) = codes.iter_mut().find(|c| c.id == id) {
            c.verified = true;
        }
        Ok(())
    }

    async fn delete_for_email(&self, email: &str) -> Result<u64, AdminApiError> {
        let mut codes = self.codes.lock().unwrap();
        let before = codes.len();
        codes.retain(|c| c.email != email);
        Ok((before - codes.len()) as u64)
    }
}

// ── MockMailer ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<SentMail>>>,
    pub fail: bool,
}

impl MockMailer {
    pub fn ok() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: true,
        }
    }

    pub fn sent_handle(&self) -> Arc<Mutex<Vec<SentMail>>> {
        Arc::clone(&self.sent)
    }
}

impl Mailer for MockMailer {
    async fn send(&self, to: &str, subject: &str, body_html: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("mail transport unavailable");
        }
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_owned(),
            subject: subject.to_owned(),
            body: body_html.to_owned(),
        });
        Ok(())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn live_login_code(email: &str, code: &str) -> LoginCode {
    LoginCode {
        id: Uuid::new_v4(),
        email: email.to_owned(),
        code: code.to_owned(),
        expires_at: Utc::now() + chrono::Duration::seconds(300),
        verified: false,
        created_at: Utc::now(),
    }
}

pub fn expired_login_code(email: &str, code: &str) -> LoginCode {
    LoginCode {
        expires_at: Utc::now() - chrono::Duration::seconds(1),
        created_at: Utc::now() - chrono::Duration::seconds(301),
        ..live_login_code(email, code)
    }
}
