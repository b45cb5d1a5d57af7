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
                    .table(EntryFavorite::Table)
                    .if_not_exists()
                    .col(pk_uuid(EntryFavorite::Id))
                    .col(uuid(EntryFavorite::EntryId))
                    .col(uuid(EntryFavorite::CreatedById))
                    .col(timestamp_with_time_zone(EntryFavorite::CreateDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_favorite_entry_id")
                            .from(EntryFavorite::Table, EntryFavorite::EntryId)
                            .to(Entry::Table, Entry::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_favorite_created_by_id")
                            .from(EntryFavorite::Table, EntryFavorite::CreatedById)
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
            .drop_table(Table::drop().table(EntryFavorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EntryFavorite {
    Table,
    Id,
    EntryId,
    CreatedById,
    CreateDate,
}
