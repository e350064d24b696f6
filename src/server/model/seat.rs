//! Seat domain model and enumerations.

use crate::{
    model::seat::{CreateSeatDto, ReserveSeatDto, SeatDto},
    server::error::{internal::InternalError, validation::ValidationErrors},
};

/// Maximum length of a seat number after trimming.
pub const MAX_SEAT_NUMBER_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatType {
    Unknown = 0,
    Window = 1,
    Middle = 2,
    Aisle = 3,
}

impl TryFrom<i32> for SeatType {
    type Error = InternalError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Window),
            2 => Ok(Self::Middle),
            3 => Ok(Self::Aisle),
            value => Err(InternalError::InvalidDiscriminant {
                kind: "SeatType",
                value,
            }),
        }
    }
}

impl From<SeatType> for i32 {
    fn from(seat_type: SeatType) -> Self {
        seat_type as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatClass {
    Unknown = 0,
    FirstClass = 1,
    Business = 2,
    Economy = 3,
}

impl TryFrom<i32> for SeatClass {
    type Error = InternalError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::FirstClass),
            2 => Ok(Self::Business),
            3 => Ok(Self::Economy),
            value => Err(InternalError::InvalidDiscriminant {
                kind: "SeatClass",
                value,
            }),
        }
    }
}

impl From<SeatClass> for i32 {
    fn from(seat_class: SeatClass) -> Self {
        seat_class as i32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    pub id: i32,
    pub flight_id: i32,
    pub seat_number: String,
    pub seat_type: SeatType,
    pub seat_class: SeatClass,
    pub is_reserved: bool,
}

impl Seat {
    pub fn from_entity(entity: entity::seat::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            flight_id: entity.flight_id,
            seat_number: entity.seat_number,
            seat_type: SeatType::try_from(entity.seat_type)?,
            seat_class: SeatClass::try_from(entity.seat_class)?,
            is_reserved: entity.is_reserved,
        })
    }

    pub fn into_dto(self) -> SeatDto {
        SeatDto {
            id: self.id,
            flight_id: self.flight_id,
            seat_number: self.seat_number,
            seat_type: self.seat_type.into(),
            seat_class: self.seat_class.into(),
            is_reserved: self.is_reserved,
        }
    }
}

/// Checks a seat number and returns it trimmed.
///
/// Shared by seat creation, reservation and bookings that request a specific seat.
pub fn validate_seat_number(
    errors: &mut ValidationErrors,
    field: &str,
    seat_number: &str,
) -> String {
    let seat_number = seat_number.trim().to_string();
    errors.check(seat_number.is_empty(), field, "Seat number is required.");
    errors.check(
        seat_number.chars().count() > MAX_SEAT_NUMBER_LENGTH,
        field,
        format!("Seat number must not exceed {MAX_SEAT_NUMBER_LENGTH} characters."),
    );
    seat_number
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSeatParam {
    pub flight_id: i32,
    pub seat_number: String,
    pub seat_type: SeatType,
    pub seat_class: SeatClass,
}

impl CreateSeatParam {
    pub fn from_dto(dto: CreateSeatDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check(dto.flight_id <= 0, "flightId", "Flight id must be greater than 0.");
        let seat_number = validate_seat_number(&mut errors, "seatNumber", &dto.seat_number);

        let seat_type = SeatType::try_from(dto.seat_type).ok();
        errors.check(seat_type.is_none(), "type", "Type must be a valid seat type.");
        let seat_class = SeatClass::try_from(dto.seat_class).ok();
        errors.check(seat_class.is_none(), "class", "Class must be a valid seat class.");

        match (seat_type, seat_class) {
            (Some(seat_type), Some(seat_class)) if errors.is_empty() => Ok(Self {
                flight_id: dto.flight_id,
                seat_number,
                seat_type,
                seat_class,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveSeatParam {
    pub flight_id: i32,
    pub seat_number: String,
}

impl ReserveSeatParam {
    pub fn from_dto(dto: ReserveSeatDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check(dto.flight_id <= 0, "flightId", "Flight id must be greater than 0.");
        let seat_number = validate_seat_number(&mut errors, "seatNumber", &dto.seat_number);

        errors.into_result()?;

        Ok(Self {
            flight_id: dto.flight_id,
            seat_number,
        })
    }
}
