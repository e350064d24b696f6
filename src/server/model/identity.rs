//! Identity user model and registration parameters.

use crate::{
    model::identity::{RegisterUserDto, UserDto},
    server::error::validation::ValidationErrors,
};

/// Minimum number of characters in a password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A registered user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub passport_number: String,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            passport_number: entity.passport_number,
        }
    }

    /// Converts to a DTO, attaching the passenger created alongside the user.
    pub fn into_dto(self, passenger_id: i32) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            passport_number: self.passport_number,
            passenger_id,
        }
    }
}

/// Result of a registration: the user and the passenger linked to it.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredUser {
    pub user: User,
    pub passenger_id: i32,
}

impl RegisteredUser {
    pub fn into_dto(self) -> UserDto {
        self.user.into_dto(self.passenger_id)
    }
}

/// Registration request that passed field validation.
///
/// Holds the plain password only until the service hashes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserParam {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub passport_number: String,
}

impl RegisterUserParam {
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = dto.first_name.trim().to_string();
        let last_name = dto.last_name.trim().to_string();
        let username = dto.username.trim().to_string();
        let email = dto.email.trim().to_string();
        let passport_number = dto.passport_number.trim().to_string();

        errors.check(first_name.is_empty(), "firstName", "First name is required.");
        errors.check(last_name.is_empty(), "lastName", "Last name is required.");
        errors.check(username.is_empty(), "username", "Username is required.");
        errors.check(
            passport_number.is_empty(),
            "passportNumber",
            "Passport number is required.",
        );
        errors.check(
            !is_valid_email(&email),
            "email",
            "Email must be a valid email address.",
        );
        errors.check(
            dto.password.chars().count() < MIN_PASSWORD_LENGTH,
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters."),
        );
        errors.check(
            dto.confirm_password != dto.password,
            "confirmPassword",
            "Passwords do not match.",
        );

        errors.into_result()?;

        Ok(Self {
            first_name,
            last_name,
            username,
            email,
            password: dto.password,
            passport_number,
        })
    }
}

/// Requires exactly one `@` with non-empty text on both sides.
fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
