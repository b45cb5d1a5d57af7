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
                    .table(EntryCommentFavorite::Table)
                    .if_not_exists()
                    .col(pk_uuid(EntryCommentFavorite::Id))
                    .col(uuid(EntryCommentFavorite::EntryCommentId))
                    .col(uuid(EntryCommentFavorite::CreatedById))
                    .col(timestamp_with_time_zone(EntryCommentFavorite::CreateDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_comment_favorite_entry_comment_id")
                            .from(
                                EntryCommentFavorite::Table,
                                EntryCommentFavorite::EntryCommentId,
                            )
                            .to(EntryComment::Table, EntryComment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_comment_favorite_created_by_id")
                            .from(
                                EntryCommentFavorite::Table,
                                EntryCommentFavorite::CreatedById,
                            )
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
            .drop_table(Table::drop().table(EntryCommentFavorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EntryCommentFavorite {
    Table,
    Id,
    EntryCommentId,
    CreatedById,
    CreateDate,
}
