use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::passenger::{CompleteRegistrationDto, PassengerDto},
    server::{
        error::AppError, model::passenger::CompleteRegistrationParam,
        service::passenger::PassengerService, state::AppState,
    },
};

pub async fn get_passenger_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let passenger = PassengerService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(passenger.into_dto())))
}

pub async fn get_passengers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let passengers: Vec<PassengerDto> = PassengerService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|passenger| passenger.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(passengers)))
}

/// Set type and age on the passenger holding a passport number.
///
/// # Returns
/// - `200 OK` - The updated passenger
/// - `400 Bad Request` - Invalid passenger type or age
/// - `404 Not Found` - No passenger with that passport number
pub async fn complete_registration(
    State(state): State<AppState>,
    Json(payload): Json<CompleteRegistrationDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CompleteRegistrationParam::from_dto(payload)?;

    let passenger = PassengerService::new(&state.db)
        .complete_registration(param)
        .await?;

    Ok((StatusCode::OK, Json(passenger.into_dto())))
}
