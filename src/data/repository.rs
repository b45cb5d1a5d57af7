//! Generic repository over any record entity.
//!
//! One implementation serves every table in the schema: the repository is
//! parameterized by the entity type and by the connection it runs on. Passing
//! a [`sea_orm::DatabaseTransaction`] instead of the base connection is the
//! explicit unit of work — nothing issued through the transaction is visible
//! elsewhere until it commits. There is no ambient change tracking: reads
//! return plain detached models, and writes send exactly the `ActiveValue::Set`
//! fields the caller provides.
//!
//! Every insert funnels through [`store::prepare_new`], which assigns the id
//! and stamps `create_date` for rows that enter without them. Update paths
//! strip the id and `create_date` slots from the SET clause, so the creation
//! timestamp of a persisted row can never change.

use std::marker::PhantomData;

use chrono::Utc;
use entity::record::{Record, RecordModel};
use sea_orm::{
    sea_query::IntoCondition, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Related, Select,
};
use uuid::Uuid;

use crate::{data::store, error::repo::RepoError};

/// Uniform CRUD, bulk, and query operations for one entity type `E`,
/// executed over connection `C` (pool handle or open transaction).
pub struct Repository<'a, C, E> {
    conn: &'a C,
    entity: PhantomData<E>,
}

impl<'a, C, E> Repository<'a, C, E>
where
    C: ConnectionTrait,
    E: Record,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: RecordModel + Send,
{
    pub fn new(conn: &'a C) -> Self {
        Self {
            conn,
            entity: PhantomData,
        }
    }

    // Insert operations

    /// Inserts one new record and returns the number of affected rows.
    pub async fn add(&self, mut model: E::ActiveModel) -> Result<u64, RepoError> {
        store::prepare_new(&mut model, Utc::now());

        Ok(E::insert(model).exec_without_returning(self.conn).await?)
    }

    /// Inserts one new record and returns the persisted row.
    pub async fn add_returning(&self, mut model: E::ActiveModel) -> Result<E::Model, RepoError> {
        store::prepare_new(&mut model, Utc::now());

        Ok(E::insert(model).exec_with_returning(self.conn).await?)
    }

    /// Inserts a batch of new records in one round-trip.
    ///
    /// An empty batch is a no-op returning 0 without touching storage.
    pub async fn add_all(&self, mut models: Vec<E::ActiveModel>) -> Result<u64, RepoError> {
        if models.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        for model in &mut models {
            store::prepare_new(model, now);
        }

        Ok(E::insert_many(models)
            .exec_without_returning(self.conn)
            .await?)
    }

    /// Bulk insert entry point; same contract as [`Self::add_all`].
    pub async fn bulk_add(&self, models: Vec<E::ActiveModel>) -> Result<u64, RepoError> {
        self.add_all(models).await
    }

    // Update operations

    /// Issues an UPDATE for the row with the model's id, writing exactly the
    /// `Set` fields. The id and `create_date` slots are stripped from the SET
    /// clause; the creation timestamp is immutable after insert.
    ///
    /// Returns the number of affected rows (0 when no such row exists).
    pub async fn update(&self, mut model: E::ActiveModel) -> Result<u64, RepoError> {
        let id = model.id().ok_or_else(|| {
            RepoError::InvalidArgument("update requires the entity id to be set".into())
        })?;

        model.clear_id();
        model.clear_create_date();

        let result = E::update_many()
            .set(model)
            .filter(E::id_column().eq(id))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Upsert-named operation that only ever updates.
    ///
    /// Kept byte-compatible with the behavior observed upstream: when no row
    /// with the given id exists, an update is still issued and nothing is
    /// inserted (affected count 0). Callers that want an insert use
    /// [`Self::add`].
    pub async fn add_or_update(&self, model: E::ActiveModel) -> Result<u64, RepoError> {
        self.update(model).await
    }

    /// Updates each model in turn and returns the summed affected count.
    pub async fn bulk_update(&self, models: Vec<E::ActiveModel>) -> Result<u64, RepoError> {
        let mut affected = 0;
        for model in models {
            affected += self.update(model).await?;
        }

        Ok(affected)
    }

    // Delete operations

    /// Deletes the row identified by the model's id.
    pub async fn delete(&self, model: E::Model) -> Result<u64, RepoError> {
        let id = model.into_active_model().id().ok_or_else(|| {
            RepoError::InvalidArgument("delete requires the entity id to be set".into())
        })?;

        let result = E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Resolves the row by id and deletes it.
    ///
    /// A missing row fails with [`RepoError::InvalidArgument`]; this mirrors
    /// the argument-style not-found the callers of this layer rely on.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, RepoError> {
        let model = self.get_by_id(id).await?.ok_or_else(|| {
            RepoError::InvalidArgument(format!("no record with id {id} to delete"))
        })?;

        self.delete(model).await
    }

    /// Deletes every row matching the filter; returns the affected count.
    pub async fn delete_range(&self, filter: impl IntoCondition) -> Result<u64, RepoError> {
        let result = E::delete_many().filter(filter).exec(self.conn).await?;

        Ok(result.rows_affected)
    }

    /// Bulk delete by predicate; same contract as [`Self::delete_range`].
    pub async fn bulk_delete(&self, filter: impl IntoCondition) -> Result<u64, RepoError> {
        self.delete_range(filter).await
    }

    /// Deletes the given models by id in one statement.
    pub async fn bulk_delete_entities(&self, models: Vec<E::Model>) -> Result<u64, RepoError> {
        let ids: Vec<Uuid> = models
            .into_iter()
            .filter_map(|m| m.into_active_model().id())
            .collect();

        self.bulk_delete_by_ids(ids).await
    }

    /// Deletes the rows with the given ids. An empty id list is a no-op
    /// returning 0.
    pub async fn bulk_delete_by_ids(&self, ids: Vec<Uuid>) -> Result<u64, RepoError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = E::delete_many()
            .filter(E::id_column().is_in(ids))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    // Query operations

    /// Filtered query builder for callers that compose further (pagination,
    /// extra conditions, related loads) before executing.
    pub fn get(&self, filter: impl IntoCondition) -> Select<E> {
        E::find().filter(filter)
    }

    /// All rows of the collection.
    pub async fn get_all(&self) -> Result<Vec<E::Model>, RepoError> {
        Ok(E::find().all(self.conn).await?)
    }

    /// Fetches by id; `None` when absent, never an error.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<E::Model>, RepoError> {
        Ok(E::find()
            .filter(E::id_column().eq(id))
            .one(self.conn)
            .await?)
    }

    /// Fetches by id together with one related row over a declared relation.
    pub async fn get_by_id_with_related<R>(
        &self,
        id: Uuid,
    ) -> Result<Option<(E::Model, Option<R::Model>)>, RepoError>
    where
        R: EntityTrait,
        E: Related<R>,
    {
        Ok(E::find()
            .filter(E::id_column().eq(id))
            .find_also_related(R::default())
            .one(self.conn)
            .await?)
    }

    /// Filtered, optionally ordered list. Without an explicit order the row
    /// order is whatever the engine returns.
    pub async fn get_list(
        &self,
        filter: Option<Condition>,
        order: Option<(E::Column, Order)>,
    ) -> Result<Vec<E::Model>, RepoError> {
        let mut query = E::find();

        if let Some(filter) = filter {
            query = query.filter(filter);
        }

        if let Some((column, order)) = order {
            query = query.order_by(column, order);
        }

        Ok(query.all(self.conn).await?)
    }

    /// Filtered list with one related row loaded per result.
    pub async fn get_list_with_related<R>(
        &self,
        filter: Option<Condition>,
    ) -> Result<Vec<(E::Model, Option<R::Model>)>, RepoError>
    where
        R: EntityTrait,
        E: Related<R>,
    {
        let mut query = E::find().find_also_related(R::default());

        if let Some(filter) = filter {
            query = query.filter(filter);
        }

        Ok(query.all(self.conn).await?)
    }

    /// Single-result semantics: `None` when nothing matches, error when more
    /// than one row does.
    pub async fn get_single(
        &self,
        filter: impl IntoCondition,
    ) -> Result<Option<E::Model>, RepoError> {
        let mut rows = E::find().filter(filter).limit(2).all(self.conn).await?;

        if rows.len() > 1 {
            return Err(RepoError::MultipleRecords);
        }

        Ok(rows.pop())
    }

    /// First match or `None`.
    pub async fn first(&self, filter: impl IntoCondition) -> Result<Option<E::Model>, RepoError> {
        Ok(E::find().filter(filter).one(self.conn).await?)
    }

    /// Number of rows matching the filter.
    pub async fn count(&self, filter: impl IntoCondition) -> Result<u64, RepoError>
    where
        E::Model: Sync,
    {
        Ok(E::find().filter(filter).count(self.conn).await?)
    }
}
