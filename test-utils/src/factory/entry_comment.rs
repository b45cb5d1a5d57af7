//! Entry-comment factory for creating test comment rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Creates a comment on the given entry by the given user.
pub async fn create_comment(
    db: &DatabaseConnection,
    entry_id: Uuid,
    created_by_id: Uuid,
) -> Result<entity::entry_comment::Model, DbErr> {
    entity::entry_comment::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        content: ActiveValue::Set(format!("Comment {}", next_id())),
        entry_id: ActiveValue::Set(entry_id),
        created_by_id: ActiveValue::Set(created_by_id),
        create_date: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
