use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::ProblemDetails;

#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    #[error("Booking not found")]
    NotFound,

    /// Flight status is neither Scheduled nor Delay.
    #[error("Flight is not open for booking")]
    FlightNotOpen,

    /// Every non-deleted seat on the flight is reserved.
    #[error("No seats available")]
    NoSeatsAvailable,

    #[error("Booking is already cancelled")]
    AlreadyCancelled,
}

/// Maps booking errors to problem details.
///
/// # Returns
/// - 400 Bad Request - `FlightNotOpen`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `NoSeatsAvailable`, `AlreadyCancelled`
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::FlightNotOpen => StatusCode::BAD_REQUEST,
            Self::NoSeatsAvailable | Self::AlreadyCancelled => StatusCode::CONFLICT,
        };

        tracing::warn!(error = %self, "booking request rejected");

        ProblemDetails::new(status, self.to_string()).into_response()
    }
}
