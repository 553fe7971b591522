use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use folio_auth_types::gate::AdminTokenSecret;

use crate::infra::db::{DbLoginCodeRepository, DbSettingsStore};
use crate::infra::mail::HttpMailer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub mailer: HttpMailer,
    pub jwt_secret: String,
}

impl AppState {
    pub fn settings_store(&self) -> DbSettingsStore {
        DbSettingsStore {
            db: self.db.clone(),
        }
    }

    pub fn login_codes(&self) -> DbLoginCodeRepository {
        DbLoginCodeRepository {
            db: self.db.clone(),
        }
    }

    pub fn mailer(&self) -> HttpMailer {
        self.mailer.clone()
    }
}

impl FromRef<AppState> for AdminTokenSecret {
    fn from_ref(state: &AppState) -> Self {
        AdminTokenSecret(state.jwt_secret.clone())
    }
}
