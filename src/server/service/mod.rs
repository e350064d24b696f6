//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Rules**: Existence chains, uniqueness checks and state transitions
//! - **Orchestration**: Coordinating repositories across modules
//! - **Transaction Management**: Multi-row mutations commit or roll back together
//! - **Caching**: The availability search result cache and its invalidation
//!
//! Field-level validation happens earlier, when controllers build parameter types from
//! DTOs; services receive already valid parameters.

pub mod aircraft;
pub mod airport;
pub mod booking;
pub mod cache;
pub mod flight;
pub mod identity;
pub mod passenger;
pub mod seat;
