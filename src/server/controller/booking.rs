use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::booking::{BookingDto, BookingsQueryDto, CreateBookingDto},
    server::{
        error::AppError, model::booking::CreateBookingParam, service::booking::BookingService,
        state::AppState,
    },
};

/// Book a seat on a flight.
///
/// Without a seat number the lowest-numbered free seat is assigned.
///
/// # Returns
/// - `201 Created` - The confirmed booking
/// - `400 Bad Request` - Invalid fields, or the flight no longer takes bookings
/// - `404 Not Found` - Passenger, flight or requested seat does not exist
/// - `409 Conflict` - Requested seat taken, or no seat left
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateBookingParam::from_dto(payload)?;

    let booking = BookingService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

pub async fn get_booking_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// List bookings newest first, optionally only those of `passengerId`.
pub async fn get_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingsQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let bookings: Vec<BookingDto> = BookingService::new(&state.db)
        .get_all(query.passenger_id)
        .await?
        .into_iter()
        .map(|booking| booking.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(bookings)))
}

/// Cancel a booking and free its seat.
///
/// # Returns
/// - `200 OK` - The cancelled booking
/// - `404 Not Found` - Booking does not exist
/// - `409 Conflict` - Booking already cancelled
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db).cancel(id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}
