//! Aircraft factory for creating test aircraft entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test aircraft with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let aircraft = AircraftFactory::new(&db)
///     .model("A320")
///     .deleted(true)
///     .build()
///     .await?;
/// ```
pub struct AircraftFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    model: String,
    manufacturing_year: i32,
    is_deleted: bool,
}

impl<'a> AircraftFactory<'a> {
    /// Creates a new AircraftFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Aircraft {id}"`
    /// - model: `"MODEL-{id}"`
    /// - manufacturing_year: `2015`
    /// - is_deleted: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Aircraft {}", id),
            model: format!("MODEL-{}", id),
            manufacturing_year: 2015,
            is_deleted: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn manufacturing_year(mut self, year: i32) -> Self {
        self.manufacturing_year = year;
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// Builds and inserts the aircraft entity into the database.
    pub async fn build(self) -> Result<entity::aircraft::Model, DbErr> {
        entity::aircraft::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            model: ActiveValue::Set(self.model),
            manufacturing_year: ActiveValue::Set(self.manufacturing_year),
            is_deleted: ActiveValue::Set(self.is_deleted),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an aircraft with default values.
pub async fn create_aircraft(db: &DatabaseConnection) -> Result<entity::aircraft::Model, DbErr> {
    AircraftFactory::new(db).build().await
}
