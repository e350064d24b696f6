use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftDto {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturing_year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAircraftDto {
    pub name: String,
    pub model: String,
    pub manufacturing_year: i32,
}
