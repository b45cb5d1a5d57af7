use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000001_create_user_table::User,
    m20260810_000003_create_entry_comment_table::EntryComment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EntryCommentVote::Table)
                    .if_not_exists()
                    .col(pk_uuid(EntryCommentVote::Id))
                    .col(uuid(EntryCommentVote::EntryCommentId))
                    .col(uuid(EntryCommentVote::CreatedById))
                    .col(small_integer(EntryCommentVote::VoteType))
                    .col(timestamp_with_time_zone(EntryCommentVote::CreateDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_comment_vote_entry_comment_id")
                            .from(EntryCommentVote::Table, EntryCommentVote::EntryCommentId)
                            .to(EntryComment::Table, EntryComment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_comment_vote_created_by_id")
                            .from(EntryCommentVote::Table, EntryCommentVote::CreatedById)
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
            .drop_table(Table::drop().table(EntryCommentVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EntryCommentVote {
    Table,
    Id,
    EntryCommentId,
    CreatedById,
    VoteType,
    CreateDate,
}
