use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use test_utils::{
    builder::TestBuilder,
    factory::{self, flight::FlightFactory, helpers::create_flight_dependencies, seat::SeatFactory},
};

use crate::server::{
    error::{flight::FlightError, AppError},
    model::flight::{AvailableFlightsParam, CreateFlightParam, FlightStatus, UpdateFlightParam},
    service::flight::{FlightCache, FlightService},
};

mod clear;
mod create;
mod get_available;
mod update;

fn cache() -> FlightCache {
    FlightCache::new(StdDuration::from_secs(60))
}

fn flight_param(
    flight_number: &str,
    aircraft_id: i32,
    departure_airport_id: i32,
    arrival_airport_id: i32,
) -> CreateFlightParam {
    let departure_date = Utc::now() + Duration::days(7);

    CreateFlightParam {
        flight_number: flight_number.to_string(),
        aircraft_id,
        departure_airport_id,
        arrival_airport_id,
        departure_date,
        arrival_date: departure_date + Duration::hours(3),
        duration_minutes: 180,
        status: FlightStatus::Scheduled,
        price: 250.0,
    }
}
