use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmailConfirmation::Table)
                    .if_not_exists()
                    .col(pk_uuid(EmailConfirmation::Id))
                    .col(uuid(EmailConfirmation::UserId))
                    .col(string(EmailConfirmation::NewEmail))
                    .col(timestamp_with_time_zone(EmailConfirmation::CreateDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_email_confirmation_user_id")
                            .from(EmailConfirmation::Table, EmailConfirmation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmailConfirmation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmailConfirmation {
    Table,
    Id,
    UserId,
    NewEmail,
    CreateDate,
}
