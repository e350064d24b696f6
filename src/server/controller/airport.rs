use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::airport::{AirportDto, CreateAirportDto},
    server::{
        error::AppError, model::airport::CreateAirportParam, service::airport::AirportService,
        state::AppState,
    },
};

/// Create an airport.
///
/// # Returns
/// - `201 Created` - The created airport with its code upper-cased
/// - `400 Bad Request` - Empty name, code or address
/// - `409 Conflict` - Airport code already used
pub async fn create_airport(
    State(state): State<AppState>,
    Json(payload): Json<CreateAirportDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateAirportParam::from_dto(payload)?;

    let airport = AirportService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(airport.into_dto())))
}

pub async fn get_airports(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let airports: Vec<AirportDto> = AirportService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|airport| airport.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(airports)))
}

pub async fn get_airport_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let airport = AirportService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(airport.into_dto())))
}
