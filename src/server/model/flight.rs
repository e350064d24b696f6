//! Flight domain model, status enumeration and operation parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::flight::{AvailableFlightsQueryDto, CreateFlightDto, FlightDto, UpdateFlightDto},
    server::{
        error::{internal::InternalError, validation::ValidationErrors},
        util::parse::parse_date_filter,
    },
};

/// Maximum length of a flight number after trimming.
pub const MAX_FLIGHT_NUMBER_LENGTH: usize = 10;

/// Lifecycle state of a flight, stored and transmitted as its discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    Scheduled = 0,
    Flying = 1,
    Delay = 2,
    Canceled = 3,
    Completed = 4,
}

impl FlightStatus {
    /// Whether new bookings may still be taken for a flight in this state.
    pub fn is_open_for_booking(self) -> bool {
        matches!(self, Self::Scheduled | Self::Delay)
    }
}

impl TryFrom<i32> for FlightStatus {
    type Error = InternalError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Scheduled),
            1 => Ok(Self::Flying),
            2 => Ok(Self::Delay),
            3 => Ok(Self::Canceled),
            4 => Ok(Self::Completed),
            value => Err(InternalError::InvalidDiscriminant {
                kind: "FlightStatus",
                value,
            }),
        }
    }
}

impl From<FlightStatus> for i32 {
    fn from(status: FlightStatus) -> Self {
        status as i32
    }
}

/// A non-deleted flight as seen by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: i32,
    pub flight_number: String,
    pub aircraft_id: i32,
    pub departure_airport_id: i32,
    pub arrival_airport_id: i32,
    pub departure_date: DateTime<Utc>,
    pub arrival_date: DateTime<Utc>,
    /// Always equal to `departure_date`.
    pub flight_date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: FlightStatus,
    pub price: f64,
}

impl Flight {
    /// Converts an entity model to a flight.
    ///
    /// # Returns
    /// - `Ok(Flight)` - The converted flight
    /// - `Err(InternalError::InvalidDiscriminant)` - Stored status is out of range
    pub fn from_entity(entity: entity::flight::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            flight_number: entity.flight_number,
            aircraft_id: entity.aircraft_id,
            departure_airport_id: entity.departure_airport_id,
            arrival_airport_id: entity.arrival_airport_id,
            departure_date: entity.departure_date,
            arrival_date: entity.arrival_date,
            flight_date: entity.flight_date,
            duration_minutes: entity.duration_minutes,
            status: FlightStatus::try_from(entity.status)?,
            price: entity.price,
        })
    }

    pub fn into_dto(self) -> FlightDto {
        FlightDto {
            id: self.id,
            flight_number: self.flight_number,
            aircraft_id: self.aircraft_id,
            departure_airport_id: self.departure_airport_id,
            arrival_airport_id: self.arrival_airport_id,
            departure_date: self.departure_date,
            arrival_date: self.arrival_date,
            flight_date: self.flight_date,
            duration_minutes: self.duration_minutes,
            status: self.status.into(),
            price: self.price,
        }
    }
}

/// Validated fields of a new or edited flight.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateFlightParam {
    /// Trimmed flight number.
    pub flight_number: String,
    pub aircraft_id: i32,
    pub departure_airport_id: i32,
    pub arrival_airport_id: i32,
    pub departure_date: DateTime<Utc>,
    pub arrival_date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: FlightStatus,
    pub price: f64,
}

impl CreateFlightParam {
    /// Validates a create request; the departure must lie in the future.
    ///
    /// # Returns
    /// - `Ok(CreateFlightParam)` - Every field rule passed
    /// - `Err(ValidationErrors)` - All failing fields keyed by wire name
    pub fn from_dto(dto: CreateFlightDto) -> Result<Self, ValidationErrors> {
        Self::validate(dto, Some(Utc::now()))
    }

    /// Applies the shared flight field rules.
    ///
    /// # Arguments
    /// - `dto` - Raw request fields
    /// - `departs_after` - When set, the departure must be strictly later than this instant
    fn validate(
        dto: CreateFlightDto,
        departs_after: Option<DateTime<Utc>>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let flight_number = dto.flight_number.trim().to_string();
        errors.check(
            flight_number.is_empty(),
            "flightNumber",
            "Flight number is required.",
        );
        errors.check(
            flight_number.chars().count() > MAX_FLIGHT_NUMBER_LENGTH,
            "flightNumber",
            format!("Flight number must not exceed {MAX_FLIGHT_NUMBER_LENGTH} characters."),
        );
        errors.check(
            dto.aircraft_id <= 0,
            "aircraftId",
            "Aircraft id must be greater than 0.",
        );
        errors.check(
            dto.departure_airport_id <= 0,
            "departureAirportId",
            "Departure airport id must be greater than 0.",
        );
        errors.check(
            dto.arrival_airport_id <= 0,
            "arrivalAirportId",
            "Arrival airport id must be greater than 0.",
        );
        errors.check(
            dto.arrival_airport_id == dto.departure_airport_id,
            "arrivalAirportId",
            "Arrival airport must differ from departure airport.",
        );
        // NaN fails this comparison as well
        errors.check(!(dto.price > 0.0), "price", "Price must be greater than 0.");
        errors.check(
            dto.duration_minutes <= 0,
            "durationMinutes",
            "Duration must be greater than 0.",
        );

        let status = FlightStatus::try_from(dto.status).ok();
        errors.check(status.is_none(), "status", "Status must be a valid flight status.");

        if let Some(now) = departs_after {
            errors.check(
                dto.departure_date <= now,
                "departureDate",
                "Departure date must be in the future.",
            );
        }
        errors.check(
            dto.arrival_date <= dto.departure_date,
            "arrivalDate",
            "Arrival date must be after departure date.",
        );

        match status {
            Some(status) if errors.is_empty() => Ok(Self {
                flight_number,
                aircraft_id: dto.aircraft_id,
                departure_airport_id: dto.departure_airport_id,
                arrival_airport_id: dto.arrival_airport_id,
                departure_date: dto.departure_date,
                arrival_date: dto.arrival_date,
                duration_minutes: dto.duration_minutes,
                status,
                price: dto.price,
            }),
            _ => Err(errors),
        }
    }
}

/// Validated edit of an existing flight.
///
/// An existing flight may be edited after it departed, so the future-departure rule
/// does not apply.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFlightParam {
    pub id: i32,
    pub flight: CreateFlightParam,
}

impl UpdateFlightParam {
    pub fn from_dto(dto: UpdateFlightDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(dto.id <= 0, "id", "Id must be greater than 0.");

        match CreateFlightParam::validate(dto.flight, None) {
            Ok(flight) if errors.is_empty() => Ok(Self { id: dto.id, flight }),
            Ok(_) => Err(errors),
            Err(field_errors) => {
                errors.merge(field_errors);
                Err(errors)
            }
        }
    }
}

/// Filters of the availability search; each present field narrows the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableFlightsParam {
    pub departure_airport_id: Option<i32>,
    pub arrival_airport_id: Option<i32>,
    /// Calendar day (UTC) the flight must depart on.
    pub departure_date: Option<NaiveDate>,
    /// Calendar day (UTC) the flight must arrive on.
    pub arrival_date: Option<NaiveDate>,
}

impl AvailableFlightsParam {
    /// Parses the raw query string values.
    ///
    /// Dates accept `YYYY-MM-DD` or an RFC 3339 timestamp, keeping only the UTC date.
    pub fn from_dto(dto: AvailableFlightsQueryDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let departure_date = match dto.departure_date.as_deref() {
            Some(raw) => {
                let parsed = parse_date_filter(raw);
                errors.check(
                    parsed.is_none(),
                    "departureDate",
                    format!("'{raw}' is not a valid date."),
                );
                parsed
            }
            None => None,
        };
        let arrival_date = match dto.arrival_date.as_deref() {
            Some(raw) => {
                let parsed = parse_date_filter(raw);
                errors.check(
                    parsed.is_none(),
                    "arrivalDate",
                    format!("'{raw}' is not a valid date."),
                );
                parsed
            }
            None => None,
        };

        errors.into_result()?;

        Ok(Self {
            departure_airport_id: dto.departure_airport_id,
            arrival_airport_id: dto.arrival_airport_id,
            departure_date,
            arrival_date,
        })
    }

    /// Key under which the search result is cached; absent filters leave their slot empty.
    pub fn cache_key(&self) -> String {
        fn id(value: Option<i32>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }
        fn date(value: Option<NaiveDate>) -> String {
            value
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        }

        format!(
            "GetAvailableFlightsQuery-{}-{}-{}-{}",
            id(self.departure_airport_id),
            id(self.arrival_airport_id),
            date(self.departure_date),
            date(self.arrival_date),
        )
    }
}
