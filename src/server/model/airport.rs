//! Airport domain model and creation parameters.

use crate::{
    model::airport::{AirportDto, CreateAirportDto},
    server::error::validation::ValidationErrors,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub address: String,
}

impl Airport {
    pub fn from_entity(entity: entity::airport::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            address: entity.address,
        }
    }

    pub fn into_dto(self) -> AirportDto {
        AirportDto {
            id: self.id,
            name: self.name,
            code: self.code,
            address: self.address,
        }
    }
}

/// New airport with trimmed fields and an upper-cased code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAirportParam {
    pub name: String,
    pub code: String,
    pub address: String,
}

impl CreateAirportParam {
    pub fn from_dto(dto: CreateAirportDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = dto.name.trim().to_string();
        let code = dto.code.trim().to_uppercase();
        let address = dto.address.trim().to_string();

        errors.check(name.is_empty(), "name", "Name is required.");
        errors.check(code.is_empty(), "code", "Code is required.");
        errors.check(address.is_empty(), "address", "Address is required.");

        errors.into_result()?;

        Ok(Self {
            name,
            code,
            address,
        })
    }
}
