//! HTTP request handlers.
//!
//! Handlers extract the request, build validated parameter types from the DTOs, call the
//! matching service and convert the domain result back into a DTO. Errors propagate as
//! `AppError`, which renders RFC 7807 problem details.

pub mod aircraft;
pub mod airport;
pub mod booking;
pub mod flight;
pub mod health;
pub mod identity;
pub mod passenger;
pub mod seat;

#[cfg(test)]
mod test;
