//! Sozluk Test Utils
//!
//! Shared testing utilities for the sozluk backend. Provides a builder for
//! test contexts backed by in-memory SQLite databases, plus entity factories
//! that create fixture rows with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//! use entity::prelude::{Entry, User};
//!
//! #[tokio::test]
//! async fn test_entries() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_table(User)
//!         .with_table(Entry)
//!         .build()
//!         .await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::user::create_user(db).await?;
//!     let entry = factory::entry::create_entry(db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
