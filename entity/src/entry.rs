use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "entry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_by_id: Uuid,
    pub create_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedById",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::entry_comment::Entity")]
    EntryComment,
    #[sea_orm(has_many = "super::entry_vote::Entity")]
    EntryVote,
    #[sea_orm(has_many = "super::entry_favorite::Entity")]
    EntryFavorite,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::entry_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EntryComment.def()
    }
}

impl Related<super::entry_vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EntryVote.def()
    }
}

impl Related<super::entry_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EntryFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
