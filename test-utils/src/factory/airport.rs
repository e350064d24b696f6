//! Airport factory for creating test airport entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airports with customizable fields.
pub struct AirportFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    code: String,
    address: String,
    is_deleted: bool,
}

impl<'a> AirportFactory<'a> {
    /// Creates a new AirportFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Airport {id}"`
    /// - code: `"A{id}"`
    /// - address: `"{id} Runway Road"`
    /// - is_deleted: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Airport {}", id),
            code: format!("A{}", id),
            address: format!("{} Runway Road", id),
            is_deleted: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// Builds and inserts the airport entity into the database.
    pub async fn build(self) -> Result<entity::airport::Model, DbErr> {
        entity::airport::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            address: ActiveValue::Set(self.address),
            is_deleted: ActiveValue::Set(self.is_deleted),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airport with default values.
pub async fn create_airport(db: &DatabaseConnection) -> Result<entity::airport::Model, DbErr> {
    AirportFactory::new(db).build().await
}
