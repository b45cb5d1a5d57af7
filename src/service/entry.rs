//! Entry business logic: create, list, and detail lookups.

use sea_orm::{sea_query::IntoCondition, ActiveValue, ColumnTrait, Order};
use uuid::Uuid;

use crate::{
    data::{store::Store, EntryRepository, UserRepository},
    error::AppError,
    model::entry::{CreateEntryCommand, EntryDetailDto, EntryDto, EntryListQuery},
};

pub struct EntryService<'a> {
    pub store: &'a Store,
}

impl<'a> EntryService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Creates an entry for an existing author and returns the persisted row.
    /// The store assigns the id and creation timestamp.
    pub async fn create(&self, command: CreateEntryCommand) -> Result<EntryDto, AppError> {
        let users: UserRepository<'_, _> = self.store.repository();
        if users.get_by_id(command.created_by_id).await?.is_none() {
            return Err(AppError::NotFound("Author not found".to_string()));
        }

        let entries: EntryRepository<'_, _> = self.store.repository();
        let entry = entries
            .add_returning(entity::entry::ActiveModel {
                subject: ActiveValue::Set(command.subject),
                content: ActiveValue::Set(command.content),
                created_by_id: ActiveValue::Set(command.created_by_id),
                ..Default::default()
            })
            .await?;

        Ok(EntryDto::from_entity(entry))
    }

    /// Lists entries newest-first, optionally restricted to one author.
    pub async fn list(&self, query: EntryListQuery) -> Result<Vec<EntryDto>, AppError> {
        let entries: EntryRepository<'_, _> = self.store.repository();

        let filter = query
            .created_by_id
            .map(|author| entity::entry::Column::CreatedById.eq(author).into_condition());

        let rows = entries
            .get_list(
                filter,
                Some((entity::entry::Column::CreateDate, Order::Desc)),
            )
            .await?;

        Ok(rows.into_iter().map(EntryDto::from_entity).collect())
    }

    /// Fetches one entry with its author loaded over the declared relation.
    pub async fn detail(&self, id: Uuid) -> Result<Option<EntryDetailDto>, AppError> {
        let entries: EntryRepository<'_, _> = self.store.repository();

        let found = entries
            .get_by_id_with_related::<entity::prelude::User>(id)
            .await?;

        Ok(found.map(|(entry, author)| EntryDetailDto::from_entities(entry, author)))
    }
}
