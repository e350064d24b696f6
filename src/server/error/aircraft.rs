use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::ProblemDetails;

#[derive(Error, Debug, PartialEq)]
pub enum AircraftError {
    /// A non-deleted aircraft already uses the requested model.
    #[error("Aircraft already exist!")]
    AlreadyExists,
}

impl IntoResponse for AircraftError {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadyExists => {
                ProblemDetails::new(StatusCode::CONFLICT, self.to_string()).into_response()
            }
        }
    }
}
