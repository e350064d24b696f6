use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        flight::{AvailableFlightsQueryDto, CreateFlightDto, FlightDto, UpdateFlightDto},
    },
    server::{
        error::AppError,
        model::flight::{AvailableFlightsParam, CreateFlightParam, UpdateFlightParam},
        service::flight::FlightService,
        state::AppState,
    },
};

/// Create a new flight.
///
/// # Arguments
/// - `state` - Application state containing the database connection and availability cache
/// - `payload` - Flight data
///
/// # Returns
/// - `201 Created` - The created flight with a `Location` header pointing at it
/// - `400 Bad Request` - One or more fields failed validation
/// - `404 Not Found` - Aircraft or one of the airports does not exist
/// - `409 Conflict` - Flight number already used
pub async fn create_flight(
    State(state): State<AppState>,
    Json(payload): Json<CreateFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateFlightParam::from_dto(payload)?;

    let flight = FlightService::new(&state.db, &state.flight_cache)
        .create(param)
        .await?;

    let location = format!("/api/v1/flight/{}", flight.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(flight.into_dto()),
    ))
}

/// Get a flight by ID.
///
/// # Returns
/// - `200 OK` - The flight
/// - `404 Not Found` - Flight missing or deleted
pub async fn get_flight_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(&state.db, &state.flight_cache)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(flight.into_dto())))
}

/// Update an existing flight.
///
/// The departure date may lie in the past so that flights can be edited after takeoff.
///
/// # Returns
/// - `200 OK` - The updated flight
/// - `400 Bad Request` - One or more fields failed validation
/// - `404 Not Found` - Flight, aircraft or an airport does not exist
/// - `409 Conflict` - Flight number used by another flight
pub async fn update_flight(
    State(state): State<AppState>,
    Json(payload): Json<UpdateFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateFlightParam::from_dto(payload)?;

    let flight = FlightService::new(&state.db, &state.flight_cache)
        .update(param)
        .await?;

    Ok((StatusCode::OK, Json(flight.into_dto())))
}

/// Delete a flight and its seats.
///
/// # Returns
/// - `204 No Content` - Flight deleted
/// - `404 Not Found` - Flight missing or already deleted
pub async fn delete_flight(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    FlightService::new(&state.db, &state.flight_cache)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Search flights by route and calendar day.
///
/// # Arguments
/// - `query` - Optional airport IDs and `YYYY-MM-DD` / RFC 3339 dates
///
/// # Returns
/// - `200 OK` - Matching flights ordered by departure
/// - `400 Bad Request` - A date could not be parsed
/// - `404 Not Found` - A filter airport does not exist, or nothing matched
pub async fn get_available_flights(
    State(state): State<AppState>,
    Query(query): Query<AvailableFlightsQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let filter = AvailableFlightsParam::from_dto(query)?;

    let flights: Vec<FlightDto> = FlightService::new(&state.db, &state.flight_cache)
        .get_available(filter)
        .await?
        .into_iter()
        .map(|flight| flight.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(flights)))
}

/// Delete every flight together with its seats.
///
/// # Returns
/// - `200 OK` - Message with the number of flights cleared
pub async fn clear_flights(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summary = FlightService::new(&state.db, &state.flight_cache)
        .clear()
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!(
                "Successfully cleared {} flights and their associated seats",
                summary.flights
            ),
        }),
    ))
}

/// Delete every seat, flight, airport and aircraft.
///
/// # Returns
/// - `200 OK` - Message with the total number of records cleared
pub async fn clear_all_data(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summary = FlightService::new(&state.db, &state.flight_cache)
        .clear_all()
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!(
                "Successfully cleared {} records ({} flights, {} seats, {} airports, {} aircraft)",
                summary.total(),
                summary.flights,
                summary.seats,
                summary.airports,
                summary.aircraft
            ),
        }),
    ))
}
