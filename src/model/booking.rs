use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub passenger_id: i32,
    pub passenger_name: String,
    pub flight_id: i32,
    pub flight_number: String,
    pub seat_id: i32,
    pub seat_number: String,
    pub status: i32,
    pub price: f64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub passenger_id: i32,
    pub flight_id: i32,
    #[serde(default)]
    pub seat_number: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsQueryDto {
    pub passenger_id: Option<i32>,
}
