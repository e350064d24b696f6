//! Flight fixtures for creating in-memory test data.

use chrono::{DateTime, Duration, TimeZone, Utc};
use entity::flight;

/// Default test flight number.
pub const DEFAULT_FLIGHT_NUMBER: &str = "SK101";

/// Default stored status (Scheduled).
pub const DEFAULT_STATUS: i32 = 0;

/// Default departure time used by fixtures.
pub fn default_departure() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 15, 8, 0, 0).unwrap()
}

/// Creates a flight entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - flight_number: `"SK101"`
/// - aircraft_id / departure_airport_id / arrival_airport_id: `1` / `1` / `2`
/// - departure: 2030-01-15 08:00 UTC, two hour flight
/// - status: `0`
/// - price: `250.0`
pub fn entity() -> flight::Model {
    entity_builder().build()
}

/// Creates a flight entity builder for customization.
pub fn entity_builder() -> FlightEntityBuilder {
    FlightEntityBuilder {
        id: 1,
        flight_number: DEFAULT_FLIGHT_NUMBER.to_string(),
        status: DEFAULT_STATUS,
        departure_date: default_departure(),
        is_deleted: false,
    }
}

/// Builder for flight entity models with custom values.
pub struct FlightEntityBuilder {
    id: i32,
    flight_number: String,
    status: i32,
    departure_date: DateTime<Utc>,
    is_deleted: bool,
}

impl FlightEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn flight_number(mut self, flight_number: impl Into<String>) -> Self {
        self.flight_number = flight_number.into();
        self
    }

    pub fn status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }

    pub fn departure_date(mut self, departure_date: DateTime<Utc>) -> Self {
        self.departure_date = departure_date;
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// Builds the flight entity model.
    pub fn build(self) -> flight::Model {
        flight::Model {
            id: self.id,
            flight_number: self.flight_number,
            aircraft_id: 1,
            departure_airport_id: 1,
            arrival_airport_id: 2,
            departure_date: self.departure_date,
            arrival_date: self.departure_date + Duration::hours(2),
            flight_date: self.departure_date,
            duration_minutes: 120,
            status: self.status,
            price: 250.0,
            is_deleted: self.is_deleted,
            created_at: self.departure_date - Duration::days(30),
        }
    }
}
