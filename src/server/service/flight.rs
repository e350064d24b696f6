//! Flight management and availability search.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        aircraft::AircraftRepository, airport::AirportRepository, flight::FlightRepository,
        seat::SeatRepository,
    },
    error::{flight::FlightError, AppError},
    model::flight::{AvailableFlightsParam, CreateFlightParam, Flight, UpdateFlightParam},
    service::cache::QueryCache,
};

/// Cache of availability search results keyed by `AvailableFlightsParam::cache_key`.
pub type FlightCache = QueryCache<Vec<Flight>>;

/// Totals reported by the bulk clear operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearSummary {
    pub flights: u64,
    pub seats: u64,
    pub airports: u64,
    pub aircraft: u64,
}

impl ClearSummary {
    pub fn total(&self) -> u64 {
        self.flights + self.seats + self.airports + self.aircraft
    }
}

/// Service for flight management and the cached availability search.
pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a FlightCache,
}

impl<'a> FlightService<'a> {
    /// Creates a new FlightService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for repository operations
    /// - `cache` - Shared availability cache, cleared by every mutation
    pub fn new(db: &'a DatabaseConnection, cache: &'a FlightCache) -> Self {
        Self { db, cache }
    }

    /// Creates a flight after checking its references.
    ///
    /// Checks run in order: flight number unused, aircraft exists, departure airport
    /// exists, arrival airport exists. The first failure is returned.
    ///
    /// # Returns
    /// - `Ok(Flight)` - The created flight
    /// - `Err(AppError::FlightErr)` - Duplicate number (409) or missing reference (404)
    /// - `Err(AppError::DbErr)` - Database error
    ///
    /// A concurrent create that passes the number check first is still refused by the
    /// partial unique index and reported as `FlightError::AlreadyExists`.
    pub async fn create(&self, param: CreateFlightParam) -> Result<Flight, AppError> {
        self.check_references(&param, None).await?;

        let flight = FlightRepository::new(self.db)
            .create(param)
            .await
            .map_err(|e| AppError::on_unique_violation(e, FlightError::AlreadyExists))?;
        self.cache.invalidate_all().await;

        tracing::info!(
            flight_id = flight.id,
            flight_number = %flight.flight_number,
            "flight created"
        );

        Ok(flight)
    }

    /// Gets a non-deleted flight or `FlightError::NotFound`.
    pub async fn get_by_id(&self, id: i32) -> Result<Flight, AppError> {
        FlightRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| FlightError::NotFound.into())
    }

    /// Edits an existing flight; the same reference chain as creation applies.
    pub async fn update(&self, param: UpdateFlightParam) -> Result<Flight, AppError> {
        let repo = FlightRepository::new(self.db);

        if repo.find_by_id(param.id).await?.is_none() {
            return Err(FlightError::NotFound.into());
        }

        self.check_references(&param.flight, Some(param.id)).await?;

        let flight = repo
            .update(param.id, param.flight)
            .await
            .map_err(|e| AppError::on_unique_violation(e, FlightError::AlreadyExists))?
            .ok_or(FlightError::NotFound)?;
        self.cache.invalidate_all().await;

        tracing::info!(flight_id = flight.id, "flight updated");

        Ok(flight)
    }

    /// Soft-deletes a flight together with its seats.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !FlightRepository::new(&txn).soft_delete(id).await? {
            return Err(FlightError::NotFound.into());
        }
        let seats = SeatRepository::new(&txn).soft_delete_by_flight(id).await?;

        txn.commit().await?;
        self.cache.invalidate_all().await;

        tracing::info!(flight_id = id, seats, "flight deleted");

        Ok(())
    }

    /// Searches flights matching the filter, serving repeated searches from the cache.
    ///
    /// A cache hit returns without querying the database. Otherwise referenced airports
    /// must exist, and an empty result is reported as `FlightError::NotFound`; only
    /// non-empty results are cached, and only if no mutation cleared the cache while the
    /// query ran.
    pub async fn get_available(
        &self,
        filter: AvailableFlightsParam,
    ) -> Result<Vec<Flight>, AppError> {
        let key = filter.cache_key();

        if let Some(flights) = self.cache.get(&key).await {
            tracing::debug!(cache_key = %key, "availability served from cache");
            return Ok(flights);
        }
        let generation = self.cache.generation().await;

        let airport_repo = AirportRepository::new(self.db);
        if let Some(id) = filter.departure_airport_id {
            if !airport_repo.exists(id).await? {
                return Err(FlightError::SearchDepartureAirportNotFound(id).into());
            }
        }
        if let Some(id) = filter.arrival_airport_id {
            if !airport_repo.exists(id).await? {
                return Err(FlightError::SearchArrivalAirportNotFound(id).into());
            }
        }

        let flights = FlightRepository::new(self.db)
            .find_available(&filter)
            .await?;

        if flights.is_empty() {
            return Err(FlightError::NotFound.into());
        }

        if !self
            .cache
            .insert_if_generation(key, generation, flights.clone())
            .await
        {
            tracing::debug!("flights changed during search, result not cached");
        }

        Ok(flights)
    }

    /// Soft-deletes every seat and flight in one transaction.
    ///
    /// # Returns
    /// - `Ok(ClearSummary)` - Counts of cleared flights and seats
    pub async fn clear(&self) -> Result<ClearSummary, AppError> {
        let txn = self.db.begin().await?;

        let seats = SeatRepository::new(&txn).soft_delete_all().await?;
        let flights = FlightRepository::new(&txn).soft_delete_all().await?;

        txn.commit().await?;
        self.cache.invalidate_all().await;

        tracing::info!(flights, seats, "flights cleared");

        Ok(ClearSummary {
            flights,
            seats,
            airports: 0,
            aircraft: 0,
        })
    }

    /// Soft-deletes seats, flights, airports and aircraft in one transaction.
    pub async fn clear_all(&self) -> Result<ClearSummary, AppError> {
        let txn = self.db.begin().await?;

        let seats = SeatRepository::new(&txn).soft_delete_all().await?;
        let flights = FlightRepository::new(&txn).soft_delete_all().await?;
        let airports = AirportRepository::new(&txn).soft_delete_all().await?;
        let aircraft = AircraftRepository::new(&txn).soft_delete_all().await?;

        txn.commit().await?;
        self.cache.invalidate_all().await;

        let summary = ClearSummary {
            flights,
            seats,
            airports,
            aircraft,
        };
        tracing::info!(total = summary.total(), "all flight data cleared");

        Ok(summary)
    }

    /// Runs the ordered existence chain shared by create and update.
    async fn check_references(
        &self,
        param: &CreateFlightParam,
        editing_id: Option<i32>,
    ) -> Result<(), AppError> {
        if FlightRepository::new(self.db)
            .exists_by_number(&param.flight_number, editing_id)
            .await?
        {
            return Err(FlightError::AlreadyExists.into());
        }

        if !AircraftRepository::new(self.db)
            .exists(param.aircraft_id)
            .await?
        {
            return Err(FlightError::AircraftNotFound.into());
        }

        let airport_repo = AirportRepository::new(self.db);
        if !airport_repo.exists(param.departure_airport_id).await? {
            return Err(FlightError::DepartureAirportNotFound.into());
        }
        if !airport_repo.exists(param.arrival_airport_id).await? {
            return Err(FlightError::ArrivalAirportNotFound.into());
        }

        Ok(())
    }
}
