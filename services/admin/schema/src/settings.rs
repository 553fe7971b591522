use sea_orm::entity::prelude::*;

/// Site settings singleton. Only the auth-relevant columns are modelled
/// here; both admin fields are provisioned out-of-band and read-only to the
/// admin service.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub admin_email: Option<String>,
    pub admin_password_hash: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
