use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::ProblemDetails;

#[derive(Error, Debug, PartialEq)]
pub enum IdentityError {
    /// Username or email is already registered.
    ///
    /// The message does not say which one to avoid account enumeration.
    #[error("User already exists")]
    UserAlreadyExists,
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        match self {
            Self::UserAlreadyExists => {
                ProblemDetails::new(StatusCode::CONFLICT, self.to_string()).into_response()
            }
        }
    }
}
