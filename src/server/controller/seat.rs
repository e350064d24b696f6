use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::seat::{CreateSeatDto, ReserveSeatDto, SeatDto},
    server::{
        error::AppError,
        model::seat::{CreateSeatParam, ReserveSeatParam},
        service::seat::SeatService,
        state::AppState,
    },
};

/// Add a seat to a flight.
///
/// # Returns
/// - `201 Created` - The created seat
/// - `400 Bad Request` - Invalid seat number, type or class
/// - `404 Not Found` - Flight does not exist
/// - `409 Conflict` - Seat number already present on the flight
pub async fn create_seat(
    State(state): State<AppState>,
    Json(payload): Json<CreateSeatDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateSeatParam::from_dto(payload)?;

    let seat = SeatService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(seat.into_dto())))
}

/// List the free seats of a flight.
///
/// # Returns
/// - `200 OK` - Free seats ordered by seat number
/// - `404 Not Found` - Flight does not exist
pub async fn get_available_seats(
    State(state): State<AppState>,
    Path(flight_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let seats: Vec<SeatDto> = SeatService::new(&state.db)
        .get_available(flight_id)
        .await?
        .into_iter()
        .map(|seat| seat.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(seats)))
}

/// Reserve a seat by number.
///
/// # Returns
/// - `200 OK` - The reserved seat
/// - `404 Not Found` - Flight or seat does not exist
/// - `409 Conflict` - Seat already reserved
pub async fn reserve_seat(
    State(state): State<AppState>,
    Json(payload): Json<ReserveSeatDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = ReserveSeatParam::from_dto(payload)?;

    let seat = SeatService::new(&state.db).reserve(param).await?;

    Ok((StatusCode::OK, Json(seat.into_dto())))
}
