use axum::{extract::State, Json};
use chrono::Utc;

use crate::{model::api::HealthDto, server::state::AppState};

/// Liveness probe.
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

/// Serves the application name as plain text.
pub async fn root(State(state): State<AppState>) -> String {
    state.app_name
}
