use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000001_create_user_table::User, m20260810_000002_create_entry_table::Entry,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EntryComment::Table)
                    .if_not_exists()
                    .col(pk_uuid(EntryComment::Id))
                    .col(text(EntryComment::Content))
                    .col(uuid(EntryComment::EntryId))
                    .col(uuid(EntryComment::CreatedById))
                    .col(timestamp_with_time_zone(EntryComment::CreateDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_comment_entry_id")
                            .from(EntryComment::Table, EntryComment::EntryId)
                            .to(Entry::Table, Entry::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_comment_created_by_id")
                            .from(EntryComment::Table, EntryComment::CreatedById)
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
            .drop_table(Table::drop().table(EntryComment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EntryComment {
    Table,
    Id,
    Content,
    EntryId,
    CreatedById,
    CreateDate,
}
