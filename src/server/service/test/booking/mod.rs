use test_utils::{
    builder::TestBuilder,
    factory::{
        flight::FlightFactory,
        helpers::{create_flight_dependencies, create_passenger_with_user},
        seat::SeatFactory,
    },
};

use crate::server::{
    data::seat::SeatRepository,
    error::{booking::BookingError, seat::SeatError, AppError},
    model::booking::{BookingStatus, CreateBookingParam},
    service::booking::BookingService,
};

mod cancel;
mod create;

fn booking_param(passenger_id: i32, flight_id: i32, seat_number: Option<&str>) -> CreateBookingParam {
    CreateBookingParam {
        passenger_id,
        flight_id,
        seat_number: seat_number.map(str::to_string),
        description: None,
    }
}
