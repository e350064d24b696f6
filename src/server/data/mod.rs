//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so the same methods run against the
//! connection pool or inside a `DatabaseTransaction`. Rows are never hard-deleted: reads
//! filter on `is_deleted = false` and deletes flip that flag.

pub mod aircraft;
pub mod airport;
pub mod booking;
pub mod flight;
pub mod passenger;
pub mod seat;
pub mod user;

#[cfg(test)]
mod test;
