use sea_orm::DatabaseConnection;

use crate::server::{
    data::{flight::FlightRepository, seat::SeatRepository},
    error::{flight::FlightError, seat::SeatError, AppError},
    model::seat::{CreateSeatParam, ReserveSeatParam, Seat},
};

/// Service for seat creation, availability and reservation.
pub struct SeatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeatService<'a> {
    /// Creates a new SeatService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for repository operations
    ///
    /// # Returns
    /// - `SeatService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a seat to an existing flight; seat numbers are unique per flight.
    ///
    /// # Arguments
    /// - `param` - Validated seat fields
    ///
    /// # Returns
    /// - `Ok(Seat)` - The created, unreserved seat
    /// - `Err(AppError::FlightErr(NotFound))` - Flight missing or deleted (404)
    /// - `Err(AppError::SeatErr(AlreadyExists))` - Number taken on this flight (409)
    pub async fn create(&self, param: CreateSeatParam) -> Result<Seat, AppError> {
        self.ensure_flight_exists(param.flight_id).await?;

        let repo = SeatRepository::new(self.db);
        if repo
            .exists_on_flight(param.flight_id, &param.seat_number)
            .await?
        {
            return Err(SeatError::AlreadyExists.into());
        }

        let seat = repo
            .create(param)
            .await
            .map_err(|e| AppError::on_unique_violation(e, SeatError::AlreadyExists))?;

        tracing::info!(
            seat_id = seat.id,
            flight_id = seat.flight_id,
            seat_number = %seat.seat_number,
            "seat created"
        );

        Ok(seat)
    }

    /// Lists the free seats of a flight ordered by seat number.
    pub async fn get_available(&self, flight_id: i32) -> Result<Vec<Seat>, AppError> {
        self.ensure_flight_exists(flight_id).await?;

        SeatRepository::new(self.db).get_available(flight_id).await
    }

    /// Reserves a seat by number.
    ///
    /// The reservation itself is a conditional update, so when two requests race for the
    /// same seat exactly one succeeds and the other sees `SeatError::AlreadyReserved`.
    pub async fn reserve(&self, param: ReserveSeatParam) -> Result<Seat, AppError> {
        self.ensure_flight_exists(param.flight_id).await?;

        let repo = SeatRepository::new(self.db);
        let seat = repo
            .find_by_number(param.flight_id, &param.seat_number)
            .await?
            .ok_or(SeatError::NotFound)?;

        if seat.is_reserved || !repo.reserve(seat.id).await? {
            return Err(SeatError::AlreadyReserved.into());
        }

        tracing::info!(seat_id = seat.id, flight_id = seat.flight_id, "seat reserved");

        Ok(Seat {
            is_reserved: true,
            ..seat
        })
    }

    /// Fails with `FlightError::NotFound` unless the flight exists and is not deleted.
    async fn ensure_flight_exists(&self, flight_id: i32) -> Result<(), AppError> {
        match FlightRepository::new(self.db).find_by_id(flight_id).await? {
            Some(_) => Ok(()),
            None => Err(FlightError::NotFound.into()),
        }
    }
}
