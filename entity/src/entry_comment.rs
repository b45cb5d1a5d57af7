use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "entry_comment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub entry_id: Uuid,
    pub created_by_id: Uuid,
    pub create_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::entry::Entity",
        from = "Column::EntryId",
        to = "super::entry::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Entry,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedById",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::entry_comment_vote::Entity")]
    EntryCommentVote,
    #[sea_orm(has_many = "super::entry_comment_favorite::Entity")]
    EntryCommentFavorite,
}

impl Related<super::entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entry.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::entry_comment_vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EntryCommentVote.def()
    }
}

impl Related<super::entry_comment_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EntryCommentFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
