use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enumeration column holds a value outside its defined range.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Stored {kind} value {value} is not a known discriminant")]
    InvalidDiscriminant {
        /// Name of the enumeration being decoded
        kind: &'static str,
        /// The stored integer
        value: i32,
    },

    /// Hashing a password with Argon2 failed.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// A booking points at a row that does not exist.
    #[error("Booking {booking_id} references missing {kind} {id}")]
    DanglingReference {
        booking_id: i32,
        kind: String,
        id: i32,
    },
}
