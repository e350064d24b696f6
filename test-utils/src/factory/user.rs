//! User factory for creating test identity users.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder stored in `password_hash` by default; not a valid PHC string.
pub const DEFAULT_PASSWORD_HASH: &str = "not-a-real-hash";

/// Factory for creating test users with customizable fields.
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    passport_number: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"`
    /// - email: `"user{id}@example.com"`
    /// - first_name / last_name: `"Test"` / `"User{id}"`
    /// - password_hash: [`DEFAULT_PASSWORD_HASH`]
    /// - passport_number: `"P{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            first_name: "Test".to_string(),
            last_name: format!("User{}", id),
            password_hash: DEFAULT_PASSWORD_HASH.to_string(),
            passport_number: format!("P{}", id),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn passport_number(mut self, passport_number: impl Into<String>) -> Self {
        self.passport_number = passport_number.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            password_hash: ActiveValue::Set(self.password_hash),
            passport_number: ActiveValue::Set(self.passport_number),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
