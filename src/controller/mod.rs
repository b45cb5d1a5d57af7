//! HTTP request handlers. Thin: decode, call the service, encode.

pub mod entry;
pub mod user;
