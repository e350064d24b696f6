use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::aircraft::{AircraftDto, CreateAircraftDto},
    server::{
        error::AppError, model::aircraft::CreateAircraftParam, service::aircraft::AircraftService,
        state::AppState,
    },
};

/// Create an aircraft.
///
/// # Returns
/// - `201 Created` - The created aircraft
/// - `400 Bad Request` - Empty name or model, or manufacturing year out of range
/// - `409 Conflict` - Aircraft model already used
pub async fn create_aircraft(
    State(state): State<AppState>,
    Json(payload): Json<CreateAircraftDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateAircraftParam::from_dto(payload)?;

    let aircraft = AircraftService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(aircraft.into_dto())))
}

pub async fn get_aircraft(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let aircraft: Vec<AircraftDto> = AircraftService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|aircraft| aircraft.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(aircraft)))
}
