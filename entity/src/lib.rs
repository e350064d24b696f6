//! SeaORM entity definitions for the booking database.
//!
//! One module per table. Enumerations (flight status, seat type, ...) are stored as plain
//! integers and converted by the application at the repository boundary.

pub mod aircraft;
pub mod airport;
pub mod booking;
pub mod flight;
pub mod passenger;
pub mod prelude;
pub mod seat;
pub mod user;
