use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::ProblemDetails;

/// Rejections raised while managing or searching flights.
#[derive(Error, Debug, PartialEq)]
pub enum FlightError {
    /// A non-deleted flight already uses the requested flight number.
    #[error("Flight already exist!")]
    AlreadyExists,

    /// The flight does not exist or has been soft-deleted.
    #[error("Flight not found")]
    NotFound,

    #[error("Aircraft not found")]
    AircraftNotFound,

    #[error("Departure airport not found")]
    DepartureAirportNotFound,

    #[error("Arrival airport not found")]
    ArrivalAirportNotFound,

    /// Availability search referenced a departure airport that does not exist.
    #[error("Departure airport with ID {0} not found")]
    SearchDepartureAirportNotFound(i32),

    /// Availability search referenced an arrival airport that does not exist.
    #[error("Arrival airport with ID {0} not found")]
    SearchArrivalAirportNotFound(i32),
}

/// Maps flight errors to problem details.
///
/// # Returns
/// - 409 Conflict - `AlreadyExists`
/// - 404 Not Found - every missing-record variant
impl IntoResponse for FlightError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AlreadyExists => StatusCode::CONFLICT,
            _ => StatusCode::NOT_FOUND,
        };

        tracing::warn!(error = %self, "flight request rejected");

        ProblemDetails::new(status, self.to_string()).into_response()
    }
}
