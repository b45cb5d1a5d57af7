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
                    .table(EntryVote::Table)
                    .if_not_exists()
                    .col(pk_uuid(EntryVote::Id))
                    .col(uuid(EntryVote::EntryId))
                    .col(uuid(EntryVote::CreatedById))
                    .col(small_integer(EntryVote::VoteType))
                    .col(timestamp_with_time_zone(EntryVote::CreateDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_vote_entry_id")
                            .from(EntryVote::Table, EntryVote::EntryId)
                            .to(Entry::Table, Entry::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_vote_created_by_id")
                            .from(EntryVote::Table, EntryVote::CreatedById)
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
            .drop_table(Table::drop().table(EntryVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EntryVote {
    Table,
    Id,
    EntryId,
    CreatedById,
    VoteType,
    CreateDate,
}
