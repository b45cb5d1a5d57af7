use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with customizable database schemas.
///
/// Add entity tables in dependency order (referenced tables first), then call
/// `build()` to connect an in-memory SQLite database with those tables
/// created.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Entry)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds a CREATE TABLE statement generated from the entity's model.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table of the forum schema in dependency order.
    pub fn with_forum_tables(self) -> Self {
        self.with_table(User)
            .with_table(Entry)
            .with_table(EntryComment)
            .with_table(EntryVote)
            .with_table(EntryCommentVote)
            .with_table(EntryFavorite)
            .with_table(EntryCommentFavorite)
            .with_table(EmailConfirmation)
    }

    /// Connects the in-memory database and creates the configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
