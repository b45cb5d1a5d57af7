//! Capability traits shared by every persisted entity.
//!
//! The repository layer is generic over any entity whose table carries a uuid
//! primary key and a `create_date` column. [`Record`] names those columns on
//! the entity; [`RecordModel`] gives the store access to the corresponding
//! slots on the active model so it can assign an id and stamp the creation
//! timestamp before the row is first written.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

/// Entity with the shared record shape: uuid id + creation timestamp.
pub trait Record: EntityTrait {
    /// Column holding the primary identifier.
    fn id_column() -> Self::Column;

    /// Column holding the insert timestamp.
    fn create_date_column() -> Self::Column;
}

/// Active-model access to the id and creation-timestamp slots.
///
/// `id()` and `create_date()` return `None` only when the value is `NotSet`;
/// both `Set` and `Unchanged` count as present, so the store never overwrites
/// a value that came from the caller or from a fetched row.
pub trait RecordModel {
    fn id(&self) -> Option<Uuid>;

    fn set_id(&mut self, id: Uuid);

    /// Resets the id slot to `NotSet` so it is excluded from UPDATE clauses.
    fn clear_id(&mut self);

    fn create_date(&self) -> Option<DateTime<Utc>>;

    fn set_create_date(&mut self, at: DateTime<Utc>);

    /// Resets the creation-timestamp slot to `NotSet`; update paths call this
    /// to keep the stamp immutable after insert.
    fn clear_create_date(&mut self);
}

macro_rules! impl_record {
    ($module:ident) => {
        impl Record for crate::$module::Entity {
            fn id_column() -> Self::Column {
                crate::$module::Column::Id
            }

            fn create_date_column() -> Self::Column {
                crate::$module::Column::CreateDate
            }
        }

        impl RecordModel for crate::$module::ActiveModel {
            fn id(&self) -> Option<Uuid> {
                match &self.id {
                    ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(*v),
                    ActiveValue::NotSet => None,
                }
            }

            fn set_id(&mut self, id: Uuid) {
                self.id = ActiveValue::Set(id);
            }

            fn clear_id(&mut self) {
                self.id = ActiveValue::NotSet;
            }

            fn create_date(&self) -> Option<DateTime<Utc>> {
                match &self.create_date {
                    ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(*v),
                    ActiveValue::NotSet => None,
                }
            }

            fn set_create_date(&mut self, at: DateTime<Utc>) {
                self.create_date = ActiveValue::Set(at);
            }

            fn clear_create_date(&mut self) {
                self.create_date = ActiveValue::NotSet;
            }
        }
    };
}

impl_record!(email_confirmation);
impl_record!(entry);
impl_record!(entry_comment);
impl_record!(entry_comment_favorite);
impl_record!(entry_comment_vote);
impl_record!(entry_favorite);
impl_record!(entry_vote);
impl_record!(user);
