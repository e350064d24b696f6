//! Passenger factory for creating test passenger entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test passengers with customizable fields.
pub struct PassengerFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    name: String,
    passport_number: String,
    passenger_type: i32,
    age: Option<i32>,
    is_deleted: bool,
}

impl<'a> PassengerFactory<'a> {
    /// Creates a new PassengerFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `None`
    /// - name: `"Passenger {id}"`
    /// - passport_number: `"PP{id}"`
    /// - passenger_type: `0` (Unknown)
    /// - age: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: None,
            name: format!("Passenger {}", id),
            passport_number: format!("PP{}", id),
            passenger_type: 0,
            age: None,
            is_deleted: false,
        }
    }

    pub fn user_id(mut self, user_id: Option<i32>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn passport_number(mut self, passport_number: impl Into<String>) -> Self {
        self.passport_number = passport_number.into();
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// Builds and inserts the passenger entity into the database.
    pub async fn build(self) -> Result<entity::passenger::Model, DbErr> {
        entity::passenger::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            passport_number: ActiveValue::Set(self.passport_number),
            passenger_type: ActiveValue::Set(self.passenger_type),
            age: ActiveValue::Set(self.age),
            is_deleted: ActiveValue::Set(self.is_deleted),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a passenger with default values and no linked user.
pub async fn create_passenger(db: &DatabaseConnection) -> Result<entity::passenger::Model, DbErr> {
    PassengerFactory::new(db).build().await
}
