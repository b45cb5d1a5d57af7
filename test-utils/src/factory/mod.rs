//! Factory methods for creating test data.
//!
//! Each entity has a factory module with a builder for customization and a
//! `create_*` convenience function for quick defaults. Factories insert rows
//! directly with explicit ids and timestamps; tests exercising the store's
//! own stamping go through the repository instead.

pub mod email_confirmation;
pub mod entry;
pub mod entry_comment;
pub mod helpers;
pub mod user;

pub use email_confirmation::create_confirmation;
pub use entry::create_entry;
pub use entry_comment::create_comment;
pub use user::create_user;
