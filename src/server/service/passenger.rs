use sea_orm::DatabaseConnection;

use crate::server::{
    data::passenger::PassengerRepository,
    error::{passenger::PassengerError, AppError},
    model::passenger::{CompleteRegistrationParam, Passenger},
};

/// Service for passenger lookup and registration completion.
pub struct PassengerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PassengerService<'a> {
    /// Creates a new PassengerService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for repository operations
    ///
    /// # Returns
    /// - `PassengerService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a non-deleted passenger by ID.
    ///
    /// # Returns
    /// - `Ok(Passenger)` - The passenger
    /// - `Err(AppError::PassengerErr(NotFound))` - Missing or deleted (404)
    pub async fn get_by_id(&self, id: i32) -> Result<Passenger, AppError> {
        PassengerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| PassengerError::NotFound.into())
    }

    /// Lists every non-deleted passenger.
    pub async fn get_all(&self) -> Result<Vec<Passenger>, AppError> {
        PassengerRepository::new(self.db).get_all().await
    }

    /// Sets type and age on the passenger identified by passport number.
    ///
    /// # Returns
    /// - `Ok(Passenger)` - The updated passenger
    /// - `Err(AppError::PassengerErr(NotFound))` - No live passenger has this passport
    pub async fn complete_registration(
        &self,
        param: CompleteRegistrationParam,
    ) -> Result<Passenger, AppError> {
        let passenger = PassengerRepository::new(self.db)
            .complete_registration(param)
            .await?
            .ok_or(PassengerError::NotFound)?;

        tracing::info!(passenger_id = passenger.id, "passenger registration completed");

        Ok(passenger)
    }
}
