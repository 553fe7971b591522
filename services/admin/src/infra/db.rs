use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use folio_admin_schema::{login_codes, settings};

use crate::domain::repository::{LoginCodeRepository, SettingsStore};
use crate::domain::types::{AdminSettings, LoginCode};
use crate::error::AdminApiError;

// ── Settings store ────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSettingsStore {
    pub db: DatabaseConnection,
}

impl SettingsStore for DbSettingsStore {
    async fn admin_settings(&self) -> Result<AdminSettings, AdminApiError> {
        let model = settings::Entity::find()
            .one(&self.db)
            .await
            .context("load settings row")?;
        Ok(match model {
            Some(m) => AdminSettings {
                email: m.admin_email,
                password_hash: m.admin_password_hash,
            },
            None => AdminSettings::default(),
        })
    }
}

// ── LoginCode repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLoginCodeRepository {
    pub db: DatabaseConnection,
}

impl LoginCodeRepository for DbLoginCodeRepository {
    async fn create(&self, code: &LoginCode) -> Result<(), AdminApiError> {
        login_codes::ActiveModel {
            id: Set(code.id),
            email: Set(code.email.clone()),
            code: Set(code.code.clone()),
            expires_at: Set(code.expires_at),
            verified: Set(code.verified),
            created_at: Set(code.created_at),
        }
        .insert(&self.db)
        .await
        .context("create login code")?;
        Ok(())
    }

    async fn find_live(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<LoginCode>, AdminApiError> {
        let now = Utc::now();
        let model = login_codes::Entity::find()
            .filter(login_codes::Column::Email.eq(email))
            .filter(login_codes::Column::Code.eq(code))
            .filter(login_codes::Column::Verified.eq(false))
            .filter(login_codes::Column::ExpiresAt.gt(now))
            .order_by_desc(login_codes::Column::CreatedAt)
            .one(&self.db)
            .await
            .context("find live login code")?;
        Ok(model.map(login_code_from_model))
    }

    async fn mark_verified(&self, id: Uuid) -> Result<(), AdminApiError> {
        login_codes::ActiveModel {
            id: Set(id),
            verified: Set(true),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("mark login code verified")?;
        Ok(())
    }

    async fn delete_for_email(&self, email: &str) -> Result<u64, AdminApiError> {
        let result = login_codes::Entity::delete_many()
            .filter(login_codes::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .context("delete login codes for email")?;
        Ok(result.rows_affected)
    }
}

fn login_code_from_model(model: login_codes::Model) -> LoginCode {
    LoginCode {
        id: model.id,
        email: model.email,
        code: model.code,
        expires_at: model.expires_at,
        verified: model.verified,
        created_at: model.created_at,
    }
}
