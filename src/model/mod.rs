//! Wire types exchanged with HTTP clients.
//!
//! Every DTO serializes with camelCase field names. Enumerations travel as their integer
//! discriminants and timestamps as RFC 3339 strings.

pub mod aircraft;
pub mod airport;
pub mod api;
pub mod booking;
pub mod flight;
pub mod identity;
pub mod passenger;
pub mod seat;
