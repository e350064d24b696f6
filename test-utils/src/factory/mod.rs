//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories leave foreign keys to the caller; the `helpers`
//! module builds whole dependency chains in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let aircraft = factory::create_aircraft(&db).await?;
//!
//!     // Create a flight together with its aircraft and airports
//!     let (aircraft, departure, arrival, flight) =
//!         factory::helpers::create_flight_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let flight = factory::flight::FlightFactory::new(&db, aircraft.id, dep.id, arr.id)
//!     .flight_number("SK101")
//!     .status(2)
//!     .build()
//!     .await?;
//! ```

pub mod aircraft;
pub mod airport;
pub mod booking;
pub mod flight;
pub mod helpers;
pub mod passenger;
pub mod seat;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use aircraft::create_aircraft;
pub use airport::create_airport;
pub use booking::create_booking;
pub use flight::create_flight;
pub use passenger::create_passenger;
pub use seat::create_seat;
pub use user::create_user;
