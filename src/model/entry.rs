//! Entry commands and view projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEntryCommand {
    pub subject: String,
    pub content: String,
    pub created_by_id: Uuid,
}

/// Optional query filter for entry listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryListQuery {
    pub created_by_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryDto {
    pub id: Uuid,
    pub subject: String,
    pub content: String,
    pub created_by_id: Uuid,
    pub create_date: DateTime<Utc>,
}

impl EntryDto {
    pub fn from_entity(entry: entity::entry::Model) -> Self {
        Self {
            id: entry.id,
            subject: entry.subject,
            content: entry.content,
            created_by_id: entry.created_by_id,
            create_date: entry.create_date,
        }
    }
}

/// Entry together with its author's display name, loaded over the declared
/// relation. The author is `None` only if the row was orphaned outside the
/// schema's cascade rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryDetailDto {
    #[serde(flatten)]
    pub entry: EntryDto,
    pub author_user_name: Option<String>,
}

impl EntryDetailDto {
    pub fn from_entities(
        entry: entity::entry::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            entry: EntryDto::from_entity(entry),
            author_user_name: author.map(|u| u.user_name),
        }
    }
}
