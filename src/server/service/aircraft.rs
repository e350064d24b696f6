use sea_orm::DatabaseConnection;

use crate::server::{
    data::aircraft::AircraftRepository,
    error::{aircraft::AircraftError, AppError},
    model::aircraft::{Aircraft, CreateAircraftParam},
};

/// Service for aircraft registration and listing.
pub struct AircraftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftService<'a> {
    /// Creates a new AircraftService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for repository operations
    ///
    /// # Returns
    /// - `AircraftService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an aircraft; models are unique among non-deleted aircraft.
    pub async fn create(&self, param: CreateAircraftParam) -> Result<Aircraft, AppError> {
        let repo = AircraftRepository::new(self.db);

        if repo.exists_by_model(&param.model).await? {
            return Err(AircraftError::AlreadyExists.into());
        }

        let aircraft = repo
            .create(param)
            .await
            .map_err(|e| AppError::on_unique_violation(e, AircraftError::AlreadyExists))?;

        tracing::info!(aircraft_id = aircraft.id, model = %aircraft.model, "aircraft created");

        Ok(aircraft)
    }

    /// Lists every non-deleted aircraft.
    pub async fn get_all(&self) -> Result<Vec<Aircraft>, AppError> {
        Ok(AircraftRepository::new(self.db).get_all().await?)
    }
}
