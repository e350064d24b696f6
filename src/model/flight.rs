use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDto {
    pub id: i32,
    pub flight_number: String,
    pub aircraft_id: i32,
    pub departure_airport_id: i32,
    pub arrival_airport_id: i32,
    pub departure_date: DateTime<Utc>,
    pub arrival_date: DateTime<Utc>,
    pub flight_date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: i32,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightDto {
    pub flight_number: String,
    pub aircraft_id: i32,
    pub departure_airport_id: i32,
    pub arrival_airport_id: i32,
    pub departure_date: DateTime<Utc>,
    pub arrival_date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: i32,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlightDto {
    pub id: i32,
    #[serde(flatten)]
    pub flight: CreateFlightDto,
}

/// Query string of the availability search; dates are kept raw and parsed by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableFlightsQueryDto {
    pub departure_airport_id: Option<i32>,
    pub arrival_airport_id: Option<i32>,
    pub departure_date: Option<String>,
    pub arrival_date: Option<String>,
}
