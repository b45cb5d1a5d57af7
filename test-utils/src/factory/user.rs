//! User factory for creating test user rows.

use chrono::Utc;
use md5::{Digest, Md5};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Same digest scheme the application uses for stored passwords.
fn password_digest(password: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(password.as_bytes());
    hex::encode_upper(hasher.finalize())
}

/// Factory for test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .email_address("reader@example.com")
///     .password_plain("okuyucu")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email_address: String,
    user_name: String,
    password: String,
    first_name: String,
    last_name: String,
    email_confirmed: bool,
}

impl<'a> UserFactory<'a> {
    /// Defaults: unique email/user name from [`next_id`], the digest of
    /// "password", unconfirmed email.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email_address: format!("user{}@example.com", id),
            user_name: format!("user{}", id),
            password: password_digest("password"),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            email_confirmed: false,
        }
    }

    pub fn email_address(mut self, email_address: impl Into<String>) -> Self {
        self.email_address = email_address.into();
        self
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Stores the digest of the given cleartext password.
    pub fn password_plain(mut self, password: &str) -> Self {
        self.password = password_digest(password);
        self
    }

    pub fn email_confirmed(mut self, email_confirmed: bool) -> Self {
        self.email_confirmed = email_confirmed;
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email_address: ActiveValue::Set(self.email_address),
            user_name: ActiveValue::Set(self.user_name),
            password: ActiveValue::Set(self.password),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email_confirmed: ActiveValue::Set(self.email_confirmed),
            create_date: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
