//! SeaORM entity definitions for the sozluk database schema.
//!
//! Each module maps one table. Every table shares the same record shape: a
//! uuid primary key and a `create_date` column stamped by the store on first
//! insert. The [`record`] module exposes that shape as traits so the generic
//! repository can operate over any entity in this crate.

pub mod prelude;
pub mod record;

pub mod email_confirmation;
pub mod entry;
pub mod entry_comment;
pub mod entry_comment_favorite;
pub mod entry_comment_vote;
pub mod entry_favorite;
pub mod entry_vote;
pub mod user;
pub mod vote_type;
