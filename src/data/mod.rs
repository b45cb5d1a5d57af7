//! Database access layer.
//!
//! All persistence goes through one generic [`repository::Repository`], typed
//! per entity via the aliases below. The [`store::Store`] owns the connection
//! and is the only place new rows get their id and creation timestamp. Higher
//! layers never talk to SeaORM entities directly for writes.

pub mod repository;
pub mod store;

use sea_orm::{ConnectionTrait, IntoActiveModel};

use crate::data::repository::Repository;

/// Per-entity repository aliases. Pure specializations with no added
/// behavior; they exist so call sites and service constructors name their
/// entity type once.
pub type UserRepository<'a, C> = Repository<'a, C, entity::prelude::User>;
pub type EntryRepository<'a, C> = Repository<'a, C, entity::prelude::Entry>;
pub type EntryCommentRepository<'a, C> = Repository<'a, C, entity::prelude::EntryComment>;
pub type EntryVoteRepository<'a, C> = Repository<'a, C, entity::prelude::EntryVote>;
pub type EntryCommentVoteRepository<'a, C> = Repository<'a, C, entity::prelude::EntryCommentVote>;
pub type EntryFavoriteRepository<'a, C> = Repository<'a, C, entity::prelude::EntryFavorite>;
pub type EntryCommentFavoriteRepository<'a, C> =
    Repository<'a, C, entity::prelude::EntryCommentFavorite>;
pub type EmailConfirmationRepository<'a, C> =
    Repository<'a, C, entity::prelude::EmailConfirmation>;

/// Builds a repository for any record entity over the given connection or
/// open transaction.
pub fn repository<C, E>(conn: &C) -> Repository<'_, C, E>
where
    C: ConnectionTrait,
    E: entity::record::Record,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: entity::record::RecordModel + Send,
{
    Repository::new(conn)
}
