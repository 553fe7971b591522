use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoginCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LoginCodes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LoginCodes::Email).string().not_null())
                    .col(ColumnDef::new(LoginCodes::Code).string().not_null())
                    .col(
                        ColumnDef::new(LoginCodes::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LoginCodes::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(LoginCodes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(LoginCodes::Table)
                    .col(LoginCodes::Email)
                    .name("idx_login_codes_email")
                    .to_owned(),
            )
            .await?;

        // Expiry sweeps scan by expires_at.
        manager
            .create_index(
                Index::create()
                    .table(LoginCodes::Table)
                    .col(LoginCodes::ExpiresAt)
                    .name("idx_login_codes_expires_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoginCodes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum LoginCodes {
    Table,
    Id,
    Email,
    Code,
    ExpiresAt,
    Verified,
    CreatedAt,
}
