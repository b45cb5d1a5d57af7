//! Email-confirmation factory for creating test token rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a confirmation token for the given user and pending address.
pub async fn create_confirmation(
    db: &DatabaseConnection,
    user_id: Uuid,
    new_email: &str,
) -> Result<entity::email_confirmation::Model, DbErr> {
    entity::email_confirmation::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        user_id: ActiveValue::Set(user_id),
        new_email: ActiveValue::Set(new_email.to_string()),
        create_date: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
