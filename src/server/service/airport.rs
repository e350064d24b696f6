use sea_orm::DatabaseConnection;

use crate::server::{
    data::airport::AirportRepository,
    error::{airport::AirportError, AppError},
    model::airport::{Airport, CreateAirportParam},
};

/// Service for airport registration and lookup.
pub struct AirportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirportService<'a> {
    /// Creates a new AirportService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for repository operations
    ///
    /// # Returns
    /// - `AirportService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an airport; codes are unique among non-deleted airports.
    ///
    /// # Returns
    /// - `Ok(Airport)` - The created airport
    /// - `Err(AppError::AirportErr(AlreadyExists))` - Code already in use (409)
    pub async fn create(&self, param: CreateAirportParam) -> Result<Airport, AppError> {
        let repo = AirportRepository::new(self.db);

        if repo.exists_by_code(&param.code).await? {
            return Err(AirportError::AlreadyExists.into());
        }

        let airport = repo
            .create(param)
            .await
            .map_err(|e| AppError::on_unique_violation(e, AirportError::AlreadyExists))?;

        tracing::info!(airport_id = airport.id, code = %airport.code, "airport created");

        Ok(airport)
    }

    /// Lists every non-deleted airport.
    pub async fn get_all(&self) -> Result<Vec<Airport>, AppError> {
        Ok(AirportRepository::new(self.db).get_all().await?)
    }

    /// Gets a non-deleted airport by ID.
    ///
    /// # Returns
    /// - `Ok(Airport)` - The airport
    /// - `Err(AppError::AirportErr(NotFound))` - Missing or deleted (404)
    pub async fn get_by_id(&self, id: i32) -> Result<Airport, AppError> {
        AirportRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AirportError::NotFound.into())
    }
}
