//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to unit test
//! entity-to-domain conversions.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let flight = fixture::flight::entity_builder().status(9).build();
//! ```

pub mod flight;

pub use flight::{entity as flight_entity, entity_builder as flight_entity_builder};
