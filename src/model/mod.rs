//! Request commands, view projections, and API DTOs.

pub mod api;
pub mod entry;
pub mod user;
