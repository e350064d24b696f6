use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{helpers::create_flight_with_dependencies, seat::SeatFactory},
};

use crate::server::{data::seat::SeatRepository, error::AppError};

mod get_available;
mod reserve;
