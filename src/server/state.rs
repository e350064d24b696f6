//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::flight::FlightCache;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `FlightCache` wraps its map in an `Arc`
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Availability search results shared by every request.
    pub flight_cache: FlightCache,

    /// Name served by the root route.
    pub app_name: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, flight_cache: FlightCache, app_name: String) -> Self {
        Self {
            db,
            flight_cache,
            app_name,
        }
    }
}
