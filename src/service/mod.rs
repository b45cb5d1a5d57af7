//! Business logic between controllers and the data layer.

pub mod entry;
pub mod user;
