use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::identity::{RegisterUserParam, User};

/// Repository providing database operations for identity users.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user with an already hashed password.
    ///
    /// # Arguments
    /// - `param` - Validated registration; its plain password is ignored
    /// - `password_hash` - Argon2 PHC string to store
    pub async fn create(
        &self,
        param: &RegisterUserParam,
        password_hash: String,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username.clone()),
            email: ActiveValue::Set(param.email.clone()),
            first_name: ActiveValue::Set(param.first_name.clone()),
            last_name: ActiveValue::Set(param.last_name.clone()),
            password_hash: ActiveValue::Set(password_hash),
            passport_number: ActiveValue::Set(param.passport_number.clone()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Checks whether either the username or the email is already registered.
    pub async fn exists_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(username))
                    .add(entity::user::Column::Email.eq(email)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
