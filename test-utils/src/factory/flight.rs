//! Flight factory for creating test flight entities.
//!
//! The factory supports customization through a builder pattern. Status is given as the
//! stored integer discriminant (0 = Scheduled).

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::flight::FlightFactory;
///
/// let flight = FlightFactory::new(&db, aircraft.id, dep.id, arr.id)
///     .flight_number("SK101")
///     .departure_date(Utc::now() + Duration::days(3))
///     .build()
///     .await?;
/// ```
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    flight_number: String,
    aircraft_id: i32,
    departure_airport_id: i32,
    arrival_airport_id: i32,
    departure_date: DateTime<Utc>,
    duration: Duration,
    status: i32,
    price: f64,
    is_deleted: bool,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - flight_number: `"FL{id}"`
    /// - departure_date: 1 day from now
    /// - arrival_date: departure + 2 hours
    /// - status: `0` (Scheduled)
    /// - price: `199.0`
    /// - is_deleted: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `aircraft_id` - Aircraft operating the flight
    /// - `departure_airport_id` - Airport the flight departs from
    /// - `arrival_airport_id` - Airport the flight arrives at
    pub fn new(
        db: &'a DatabaseConnection,
        aircraft_id: i32,
        departure_airport_id: i32,
        arrival_airport_id: i32,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            flight_number: format!("FL{}", id),
            aircraft_id,
            departure_airport_id,
            arrival_airport_id,
            departure_date: Utc::now() + Duration::days(1),
            duration: Duration::hours(2),
            status: 0,
            price: 199.0,
            is_deleted: false,
        }
    }

    pub fn flight_number(mut self, flight_number: impl Into<String>) -> Self {
        self.flight_number = flight_number.into();
        self
    }

    /// Sets the departure time; the arrival keeps the configured duration.
    pub fn departure_date(mut self, departure_date: DateTime<Utc>) -> Self {
        self.departure_date = departure_date;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// Builds and inserts the flight entity into the database.
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            id: ActiveValue::NotSet,
            flight_number: ActiveValue::Set(self.flight_number),
            aircraft_id: ActiveValue::Set(self.aircraft_id),
            departure_airport_id: ActiveValue::Set(self.departure_airport_id),
            arrival_airport_id: ActiveValue::Set(self.arrival_airport_id),
            departure_date: ActiveValue::Set(self.departure_date),
            arrival_date: ActiveValue::Set(self.departure_date + self.duration),
            flight_date: ActiveValue::Set(self.departure_date),
            duration_minutes: ActiveValue::Set(self.duration.num_minutes() as i32),
            status: ActiveValue::Set(self.status),
            price: ActiveValue::Set(self.price),
            is_deleted: ActiveValue::Set(self.is_deleted),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight with default values between the given airports.
///
/// Shorthand for `FlightFactory::new(db, aircraft_id, departure, arrival).build().await`.
pub async fn create_flight(
    db: &DatabaseConnection,
    aircraft_id: i32,
    departure_airport_id: i32,
    arrival_airport_id: i32,
) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db, aircraft_id, departure_airport_id, arrival_airport_id)
        .build()
        .await
}
