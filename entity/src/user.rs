use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email_address: String,
    pub user_name: String,
    /// One-way hash, never the cleartext password.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email_confirmed: bool,
    pub create_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::entry::Entity")]
    Entry,
    #[sea_orm(has_many = "super::entry_comment::Entity")]
    EntryComment,
    #[sea_orm(has_many = "super::entry_vote::Entity")]
    EntryVote,
    #[sea_orm(has_many = "super::entry_comment_vote::Entity")]
    EntryCommentVote,
    #[sea_orm(has_many = "super::entry_favorite::Entity")]
    EntryFavorite,
    #[sea_orm(has_many = "super::entry_comment_favorite::Entity")]
    EntryCommentFavorite,
    #[sea_orm(has_many = "super::email_confirmation::Entity")]
    EmailConfirmation,
}

impl Related<super::entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entry.def()
    }
}

impl Related<super::entry_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EntryComment.def()
    }
}

impl Related<super::email_confirmation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmailConfirmation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
