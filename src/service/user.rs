//! User business logic: login and email confirmation.

use sea_orm::{ActiveValue, ColumnTrait};
use uuid::Uuid;

use crate::{
    data::{store::Store, EmailConfirmationRepository, UserRepository},
    error::AppError,
    model::user::{LoginUserCommand, LoginUserViewModel},
    util::password,
};

pub struct UserService<'a> {
    pub store: &'a Store,
}

impl<'a> UserService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Verifies the credentials and returns the login projection.
    ///
    /// Fails closed with the same error for an unknown email and a wrong
    /// password; callers cannot distinguish the two.
    pub async fn login(&self, command: LoginUserCommand) -> Result<LoginUserViewModel, AppError> {
        let users: UserRepository<'_, _> = self.store.repository();

        let user = users
            .first(entity::user::Column::EmailAddress.eq(command.email_address.as_str()))
            .await?
            .ok_or(AppError::LoginFailed)?;

        if user.password != password::encrypt(&command.password) {
            return Err(AppError::LoginFailed);
        }

        Ok(LoginUserViewModel::from_entity(user))
    }

    /// Consumes an email-confirmation token: applies the new address to the
    /// user, marks the account confirmed, and deletes the token row. Runs in
    /// one unit of work so a half-applied confirmation can never persist.
    pub async fn confirm_email(&self, confirmation_id: Uuid) -> Result<(), AppError> {
        let txn = self.store.begin().await?;

        {
            let confirmations: EmailConfirmationRepository<'_, _> =
                crate::data::repository(&txn);
            let users: UserRepository<'_, _> = crate::data::repository(&txn);

            let confirmation = confirmations
                .get_by_id(confirmation_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Email confirmation not found".to_string()))?;

            let updated = users
                .update(entity::user::ActiveModel {
                    id: ActiveValue::Set(confirmation.user_id),
                    email_address: ActiveValue::Set(confirmation.new_email.clone()),
                    email_confirmed: ActiveValue::Set(true),
                    ..Default::default()
                })
                .await?;

            if updated == 0 {
                return Err(AppError::NotFound("User not found".to_string()));
            }

            confirmations.delete_by_id(confirmation.id).await?;
        }

        txn.commit().await?;

        Ok(())
    }
}
