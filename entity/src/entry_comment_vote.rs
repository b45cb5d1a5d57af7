use sea_orm::entity::prelude::*;

use crate::vote_type::VoteType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "entry_comment_vote")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub entry_comment_id: Uuid,
    pub created_by_id: Uuid,
    pub vote_type: VoteType,
    pub create_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::entry_comment::Entity",
        from = "Column::EntryCommentId",
        to = "super::entry_comment::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    EntryComment,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedById",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::entry_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EntryComment.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
