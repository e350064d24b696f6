//! Passenger domain model, type enumeration and registration completion parameters.

use crate::{
    model::passenger::{CompleteRegistrationDto, PassengerDto},
    server::error::{internal::InternalError, validation::ValidationErrors},
};

/// Highest accepted passenger age.
pub const MAX_PASSENGER_AGE: i32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerType {
    Unknown = 0,
    Male = 1,
    Female = 2,
    Baby = 3,
}

impl TryFrom<i32> for PassengerType {
    type Error = InternalError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Male),
            2 => Ok(Self::Female),
            3 => Ok(Self::Baby),
            value => Err(InternalError::InvalidDiscriminant {
                kind: "PassengerType",
                value,
            }),
        }
    }
}

impl From<PassengerType> for i32 {
    fn from(passenger_type: PassengerType) -> Self {
        passenger_type as i32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub passport_number: String,
    pub passenger_type: PassengerType,
    pub age: Option<i32>,
}

impl Passenger {
    pub fn from_entity(entity: entity::passenger::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            passport_number: entity.passport_number,
            passenger_type: PassengerType::try_from(entity.passenger_type)?,
            age: entity.age,
        })
    }

    pub fn into_dto(self) -> PassengerDto {
        PassengerDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            passport_number: self.passport_number,
            passenger_type: self.passenger_type.into(),
            age: self.age,
        }
    }
}

/// Parameters for creating a passenger row.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePassengerParam {
    pub user_id: Option<i32>,
    pub name: String,
    pub passport_number: String,
    pub passenger_type: PassengerType,
}

/// Fills in the details a registered passenger left out.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteRegistrationParam {
    pub passport_number: String,
    pub passenger_type: PassengerType,
    pub age: i32,
}

impl CompleteRegistrationParam {
    pub fn from_dto(dto: CompleteRegistrationDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let passport_number = dto.passport_number.trim().to_string();
        errors.check(
            passport_number.is_empty(),
            "passportNumber",
            "Passport number is required.",
        );
        let passenger_type = PassengerType::try_from(dto.passenger_type).ok();
        errors.check(
            passenger_type.is_none(),
            "passengerType",
            "Passenger type must be a valid passenger type.",
        );
        errors.check(
            !(0..=MAX_PASSENGER_AGE).contains(&dto.age),
            "age",
            format!("Age must be between 0 and {MAX_PASSENGER_AGE}."),
        );

        match passenger_type {
            Some(passenger_type) if errors.is_empty() => Ok(Self {
                passport_number,
                passenger_type,
                age: dto.age,
            }),
            _ => Err(errors),
        }
    }
}
