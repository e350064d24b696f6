use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::ProblemDetails;

/// Title-level message of every validation failure response.
pub const VALIDATION_DETAIL: &str = "One or more validation errors occurred.";

/// Collected per-field validation failures.
///
/// Validators add every failing rule before returning, so a client sees all problems with
/// a request at once. Field names are the camelCase wire names.
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("One or more validation errors occurred: {errors:?}")]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure message for `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Records `message` for `field` when `failed` holds.
    pub fn check(&mut self, failed: bool, field: &str, message: impl Into<String>) {
        if failed {
            self.add(field, message);
        }
    }

    /// Moves every failure of `other` into `self`.
    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages recorded for a field, empty when the field passed.
    pub fn field(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `Ok(())` when nothing failed, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        ProblemDetails::new(StatusCode::BAD_REQUEST, VALIDATION_DETAIL)
            .with_errors(self.errors)
            .into_response()
    }
}
