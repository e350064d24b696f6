use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerDto {
    pub id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub passport_number: String,
    pub passenger_type: i32,
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRegistrationDto {
    pub passport_number: String,
    pub passenger_type: i32,
    pub age: i32,
}
