//! Storage context owning the database connection.
//!
//! The store is the single gate new rows pass through: [`prepare_new`] is the
//! one pre-commit hook, invoked by the repository's insert entry points for
//! every path (single, batch, bulk, transactional). Callers never set ids or
//! creation timestamps themselves.

use chrono::{DateTime, Utc};
use entity::record::{Record, RecordModel};
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr, IntoActiveModel,
    TransactionTrait,
};
use uuid::Uuid;

use crate::data::repository::Repository;

/// Prepares a not-yet-persisted record: assigns a fresh uuid when the id is
/// unset and stamps the creation timestamp when it is unset. Values already
/// present (set by a caller or carried over from a fetched row) are left
/// alone, so the hook never mutates an existing row's stamp.
pub(crate) fn prepare_new<M: RecordModel>(model: &mut M, now: DateTime<Utc>) {
    if model.id().is_none() {
        model.set_id(Uuid::new_v4());
    }

    if model.create_date().is_none() {
        model.set_create_date(now);
    }
}

/// Owns the connection pool and hands out repositories and transactions.
///
/// One store per process; one [`DatabaseTransaction`] per logical unit of
/// work. The store performs no retries of its own — transient-failure
/// handling stays with the sqlx driver underneath.
#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    /// Wraps an already-established connection (tests hand in their in-memory
    /// SQLite connection here).
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connects to the database behind the given URL.
    pub async fn connect(database_url: &str) -> Result<Self, DbErr> {
        let mut opt = ConnectOptions::new(database_url);
        opt.sqlx_logging(false);

        let db = Database::connect(opt).await?;

        Ok(Self { db })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Repository for `E` over the base connection.
    pub fn repository<E>(&self) -> Repository<'_, DatabaseConnection, E>
    where
        E: Record,
        E::Model: IntoActiveModel<E::ActiveModel>,
        E::ActiveModel: RecordModel + Send,
    {
        Repository::new(&self.db)
    }

    /// Opens an explicit unit of work. Repositories built over the returned
    /// transaction see each other's writes; nothing is visible on the base
    /// connection until `commit`.
    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        self.db.begin().await
    }
}
