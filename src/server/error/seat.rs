use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::ProblemDetails;

#[derive(Error, Debug, PartialEq)]
pub enum SeatError {
    /// The flight already has a non-deleted seat with this number.
    #[error("Seat already exist!")]
    AlreadyExists,

    #[error("Seat not found")]
    NotFound,

    /// The seat was reserved by an earlier request.
    #[error("Seat is already reserved")]
    AlreadyReserved,
}

impl IntoResponse for SeatError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists | Self::AlreadyReserved => StatusCode::CONFLICT,
        };

        tracing::warn!(error = %self, "seat request rejected");

        ProblemDetails::new(status, self.to_string()).into_response()
    }
}
