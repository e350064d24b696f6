//! Aircraft domain model and creation parameters.

use chrono::{Datelike, Utc};

use crate::{
    model::aircraft::{AircraftDto, CreateAircraftDto},
    server::error::validation::ValidationErrors,
};

/// Earliest manufacturing year accepted for an aircraft.
pub const MIN_MANUFACTURING_YEAR: i32 = 1900;

#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturing_year: i32,
}

impl Aircraft {
    pub fn from_entity(entity: entity::aircraft::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            model: entity.model,
            manufacturing_year: entity.manufacturing_year,
        }
    }

    pub fn into_dto(self) -> AircraftDto {
        AircraftDto {
            id: self.id,
            name: self.name,
            model: self.model,
            manufacturing_year: self.manufacturing_year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAircraftParam {
    pub name: String,
    pub model: String,
    pub manufacturing_year: i32,
}

impl CreateAircraftParam {
    pub fn from_dto(dto: CreateAircraftDto) -> Result<Self, ValidationErrors> {
        Self::validate(dto, Utc::now().year())
    }

    /// Aircraft may be registered up to one year ahead of `current_year`.
    fn validate(dto: CreateAircraftDto, current_year: i32) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = dto.name.trim().to_string();
        let model = dto.model.trim().to_string();
        let max_year = current_year + 1;

        errors.check(name.is_empty(), "name", "Name is required.");
        errors.check(model.is_empty(), "model", "Model is required.");
        errors.check(
            !(MIN_MANUFACTURING_YEAR..=max_year).contains(&dto.manufacturing_year),
            "manufacturingYear",
            format!("Manufacturing year must be between {MIN_MANUFACTURING_YEAR} and {max_year}."),
        );

        errors.into_result()?;

        Ok(Self {
            name,
            model,
            manufacturing_year: dto.manufacturing_year,
        })
    }
}
