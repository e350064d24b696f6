use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::ProblemDetails;

#[derive(Error, Debug, PartialEq)]
pub enum AirportError {
    #[error("Airport already exists!")]
    AlreadyExists,

    #[error("Airport not found")]
    NotFound,
}

impl IntoResponse for AirportError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
        };

        ProblemDetails::new(status, self.to_string()).into_response()
    }
}
