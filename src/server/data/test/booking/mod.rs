use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        helpers::{create_flight_with_dependencies, create_passenger_with_user},
        seat::SeatFactory,
    },
};

use crate::server::{data::booking::BookingRepository, error::AppError, model::booking::BookingStatus};

mod get_all;
mod into_views;
