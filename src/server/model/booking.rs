//! Booking domain model, status enumeration and creation parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::booking::{BookingDto, CreateBookingDto},
    server::{
        error::{internal::InternalError, validation::ValidationErrors},
        model::seat::validate_seat_number,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending = 0,
    Confirmed = 1,
    Cancelled = 2,
}

impl TryFrom<i32> for BookingStatus {
    type Error = InternalError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Confirmed),
            2 => Ok(Self::Cancelled),
            value => Err(InternalError::InvalidDiscriminant {
                kind: "BookingStatus",
                value,
            }),
        }
    }
}

impl From<BookingStatus> for i32 {
    fn from(status: BookingStatus) -> Self {
        status as i32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub passenger_id: i32,
    pub flight_id: i32,
    pub seat_id: i32,
    pub status: BookingStatus,
    /// Flight price at the time of booking.
    pub price: f64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            passenger_id: entity.passenger_id,
            flight_id: entity.flight_id,
            seat_id: entity.seat_id,
            status: BookingStatus::try_from(entity.status)?,
            price: entity.price,
            description: entity.description,
            created_at: entity.created_at,
        })
    }
}

/// A booking joined with the display names of what it references.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingView {
    pub booking: Booking,
    pub passenger_name: String,
    pub flight_number: String,
    pub seat_number: String,
}

impl BookingView {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.booking.id,
            passenger_id: self.booking.passenger_id,
            passenger_name: self.passenger_name,
            flight_id: self.booking.flight_id,
            flight_number: self.flight_number,
            seat_id: self.booking.seat_id,
            seat_number: self.seat_number,
            status: self.booking.status.into(),
            price: self.booking.price,
            description: self.booking.description,
            created_at: self.booking.created_at,
        }
    }
}

/// Booking request; without a seat number the first free seat is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingParam {
    pub passenger_id: i32,
    pub flight_id: i32,
    pub seat_number: Option<String>,
    pub description: Option<String>,
}

impl CreateBookingParam {
    pub fn from_dto(dto: CreateBookingDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check(
            dto.passenger_id <= 0,
            "passengerId",
            "Passenger id must be greater than 0.",
        );
        errors.check(dto.flight_id <= 0, "flightId", "Flight id must be greater than 0.");
        let seat_number = dto
            .seat_number
            .as_deref()
            .map(|raw| validate_seat_number(&mut errors, "seatNumber", raw));
        let description = dto
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        errors.into_result()?;

        Ok(Self {
            passenger_id: dto.passenger_id,
            flight_id: dto.flight_id,
            seat_number,
            description,
        })
    }
}

/// Row values for inserting a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertBookingParam {
    pub passenger_id: i32,
    pub flight_id: i32,
    pub seat_id: i32,
    pub status: BookingStatus,
    pub price: f64,
    pub description: Option<String>,
}
