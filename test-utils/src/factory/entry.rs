//! Entry factory for creating test entry rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

pub struct EntryFactory<'a> {
    db: &'a DatabaseConnection,
    subject: String,
    content: String,
    created_by_id: Uuid,
}

impl<'a> EntryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, created_by_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            subject: format!("Subject {}", id),
            content: format!("Content for entry {}", id),
            created_by_id,
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub async fn build(self) -> Result<entity::entry::Model, DbErr> {
        entity::entry::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            subject: ActiveValue::Set(self.subject),
            content: ActiveValue::Set(self.content),
            created_by_id: ActiveValue::Set(self.created_by_id),
            create_date: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an entry with default values for the given author.
pub async fn create_entry(
    db: &DatabaseConnection,
    created_by_id: Uuid,
) -> Result<entity::entry::Model, DbErr> {
    EntryFactory::new(db, created_by_id).build().await
}
