use chrono::{Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, flight::FlightFactory, helpers::create_flight_dependencies},
};

use crate::server::{
    data::flight::FlightRepository,
    error::AppError,
    model::flight::{AvailableFlightsParam, CreateFlightParam, FlightStatus},
};

mod create;
mod exists_by_number;
mod find_available;
mod soft_delete;
