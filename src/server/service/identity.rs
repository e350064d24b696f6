//! User registration.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{passenger::PassengerRepository, user::UserRepository},
    error::{identity::IdentityError, internal::InternalError, AppError},
    model::{
        identity::{RegisterUserParam, RegisteredUser},
        passenger::{CreatePassengerParam, PassengerType},
    },
    util::password::hash_password,
};

/// Service for user registration.
pub struct IdentityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IdentityService<'a> {
    /// Creates a new IdentityService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user and the passenger profile that belongs to it.
    ///
    /// The password is hashed with Argon2id on the blocking thread pool. The user and the
    /// passenger are inserted in one transaction.
    ///
    /// # Returns
    /// - `Ok(RegisteredUser)` - The new user and its passenger ID
    /// - `Err(AppError::IdentityErr(UserAlreadyExists))` - Username or email taken, also
    ///   when a concurrent registration inserts first
    /// - `Err(AppError::Internal)` - Hashing failed
    pub async fn register(&self, param: RegisterUserParam) -> Result<RegisteredUser, AppError> {
        if UserRepository::new(self.db)
            .exists_by_username_or_email(&param.username, &param.email)
            .await?
        {
            return Err(IdentityError::UserAlreadyExists.into());
        }

        let password = param.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| InternalError::PasswordHash(e.to_string()))??;

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(&param, password_hash)
            .await
            .map_err(|e| AppError::on_unique_violation(e, IdentityError::UserAlreadyExists))?;
        let passenger = PassengerRepository::new(&txn)
            .create(CreatePassengerParam {
                user_id: Some(user.id),
                name: format!("{} {}", param.first_name, param.last_name),
                passport_number: param.passport_number.clone(),
                passenger_type: PassengerType::Unknown,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            user_id = user.id,
            passenger_id = passenger.id,
            username = %user.username,
            "user registered"
        );

        Ok(RegisteredUser {
            user,
            passenger_id: passenger.id,
        })
    }
}
