//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs through `from_dto`, which runs every field
//! rule and reports all failures together as `ValidationErrors`.

pub mod aircraft;
pub mod airport;
pub mod booking;
pub mod flight;
pub mod identity;
pub mod passenger;
pub mod seat;
