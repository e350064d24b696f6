//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into RFC 7807 problem details responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod aircraft;
pub mod airport;
pub mod booking;
pub mod config;
pub mod flight;
pub mod identity;
pub mod internal;
pub mod passenger;
pub mod seat;
pub mod validation;

use std::collections::BTreeMap;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ProblemDetailsDto,
    server::error::{
        aircraft::AircraftError, airport::AirportError, booking::BookingError,
        config::ConfigError, flight::FlightError, identity::IdentityError,
        internal::InternalError, passenger::PassengerError, seat::SeatError,
        validation::ValidationErrors,
    },
};

/// Content type of every error body.
pub const PROBLEM_JSON_CONTENT_TYPE: &str = "application/problem+json";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain errors handle their own status mapping,
/// while infrastructure failures collapse into a logged 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Binding the listener or serving connections failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// One or more request fields failed validation.
    ///
    /// Results in 400 Bad Request listing every failing field.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    FlightErr(#[from] FlightError),

    #[error(transparent)]
    SeatErr(#[from] SeatError),

    #[error(transparent)]
    AirportErr(#[from] AirportError),

    #[error(transparent)]
    AircraftErr(#[from] AircraftError),

    #[error(transparent)]
    IdentityErr(#[from] IdentityError),

    #[error(transparent)]
    PassengerErr(#[from] PassengerError),

    #[error(transparent)]
    BookingErr(#[from] BookingError),

    /// Unexpected state inside the application.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl AppError {
    /// Replaces a unique constraint violation with the given domain conflict.
    ///
    /// Services check uniqueness before inserting, but a concurrent request can still win
    /// the race; the database index then rejects the write and this turns the rejection
    /// into the same 409 the check would have produced.
    ///
    /// # Arguments
    /// - `err` - Error returned by a repository write
    /// - `conflict` - Domain error reported when `err` is a unique violation
    ///
    /// # Returns
    /// - `conflict` converted to `AppError` - The write hit a unique index
    /// - `err` converted to `AppError` - Any other failure, unchanged
    pub fn on_unique_violation(err: impl Into<AppError>, conflict: impl Into<AppError>) -> Self {
        match err.into() {
            Self::DbErr(db_err)
                if matches!(
                    db_err.sql_err(),
                    Some(SqlErr::UniqueConstraintViolation(_))
                ) =>
            {
                conflict.into()
            }
            other => other,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - Variable - For domain errors, delegated to their own `into_response()`
/// - 500 Internal Server Error - For all other error types (DbErr, IoErr, ConfigErr, Internal)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => err.into_response(),
            Self::FlightErr(err) => err.into_response(),
            Self::SeatErr(err) => err.into_response(),
            Self::AirportErr(err) => err.into_response(),
            Self::AircraftErr(err) => err.into_response(),
            Self::IdentityErr(err) => err.into_response(),
            Self::PassengerErr(err) => err.into_response(),
            Self::BookingErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// RFC 7807 error response under construction.
///
/// Fills `type` and `title` from the status code so call sites only supply the detail.
pub struct ProblemDetails {
    status: StatusCode,
    detail: String,
    errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ProblemDetails {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
            errors: None,
        }
    }

    /// Attaches per-field validation messages.
    pub fn with_errors(mut self, errors: BTreeMap<String, Vec<String>>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Builds the wire body without producing a response.
    pub fn into_dto(self) -> ProblemDetailsDto {
        ProblemDetailsDto {
            problem_type: problem_type_uri(self.status).to_string(),
            title: self
                .status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            status: self.status.as_u16(),
            detail: self.detail,
            errors: self.errors,
        }
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = self.status;

        (
            status,
            [(header::CONTENT_TYPE, PROBLEM_JSON_CONTENT_TYPE)],
            Json(self.into_dto()),
        )
            .into_response()
    }
}

/// Maps a status code to the RFC 7231 section describing it.
fn problem_type_uri(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "https://tools.ietf.org/html/rfc7231#section-6.5.1",
        StatusCode::NOT_FOUND => "https://tools.ietf.org/html/rfc7231#section-6.5.4",
        StatusCode::CONFLICT => "https://tools.ietf.org/html/rfc7231#section-6.5.8",
        _ => "https://tools.ietf.org/html/rfc7231#section-6.6.1",
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic message to the client to avoid
/// leaking implementation details. Used as a fallback for errors that don't have specific
/// HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed with internal error");

        ProblemDetails::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred while processing the request.",
        )
        .into_response()
    }
}
