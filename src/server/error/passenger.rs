use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::ProblemDetails;

#[derive(Error, Debug, PartialEq)]
pub enum PassengerError {
    #[error("Passenger not found")]
    NotFound,
}

impl IntoResponse for PassengerError {
    fn into_response(self) -> Response {
        ProblemDetails::new(StatusCode::NOT_FOUND, self.to_string()).into_response()
    }
}
