//! User-facing commands and view projections.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login request: email plus cleartext password, hashed before comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginUserCommand {
    pub email_address: String,
    pub password: String,
}

/// Successful-login projection of a user row. Never carries the password
/// hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginUserViewModel {
    pub id: Uuid,
    pub user_name: String,
    pub email_address: String,
    pub first_name: String,
    pub last_name: String,
    pub email_confirmed: bool,
}

impl LoginUserViewModel {
    pub fn from_entity(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            email_address: user.email_address,
            first_name: user.first_name,
            last_name: user.last_name,
            email_confirmed: user.email_confirmed,
        }
    }
}
