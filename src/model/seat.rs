use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatDto {
    pub id: i32,
    pub flight_id: i32,
    pub seat_number: String,
    #[serde(rename = "type")]
    pub seat_type: i32,
    #[serde(rename = "class")]
    pub seat_class: i32,
    pub is_reserved: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSeatDto {
    pub flight_id: i32,
    pub seat_number: String,
    #[serde(rename = "type")]
    pub seat_type: i32,
    #[serde(rename = "class")]
    pub seat_class: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveSeatDto {
    pub flight_id: i32,
    pub seat_number: String,
}
