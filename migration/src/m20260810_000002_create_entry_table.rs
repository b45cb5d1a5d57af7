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
                    .table(Entry::Table)
                    .if_not_exists()
                    .col(pk_uuid(Entry::Id))
                    .col(string(Entry::Subject))
                    .col(text(Entry::Content))
                    .col(uuid(Entry::CreatedById))
                    .col(timestamp_with_time_zone(Entry::CreateDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_created_by_id")
                            .from(Entry::Table, Entry::CreatedById)
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
            .drop_table(Table::drop().table(Entry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Entry {
    Table,
    Id,
    Subject,
    Content,
    CreatedById,
    CreateDate,
}
