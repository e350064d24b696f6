use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::identity::RegisterUserDto,
    server::{
        error::AppError, model::identity::RegisterUserParam, service::identity::IdentityService,
        state::AppState,
    },
};

/// Register a user account and its passenger profile.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Names, credentials and passport number
///
/// # Returns
/// - `201 Created` - The new user with the ID of its passenger; the password hash is never returned
/// - `400 Bad Request` - One or more fields failed validation
/// - `409 Conflict` - Username or email already registered
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterUserParam::from_dto(payload)?;

    let registered = IdentityService::new(&state.db).register(param).await?;

    Ok((StatusCode::CREATED, Json(registered.into_dto())))
}
