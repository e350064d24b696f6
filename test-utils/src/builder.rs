use entity::prelude::*;
use migration::{Migrator, MigratorTrait};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Aircraft, Airport};
///
/// let test = TestBuilder::new()
///     .with_table(Aircraft)
///     .with_table(Airport)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Whether `build()` applies the real migrations before the extra tables.
    migrate: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            migrate: false,
        }
    }

    /// Builds the schema by running every migration instead of generating it from entities.
    ///
    /// Use this when a test depends on what only the migrations declare, such as the
    /// partial unique indexes on flight numbers, seat numbers, airport codes and aircraft
    /// models. Tables added with `with_table` are created afterwards.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_migrations(mut self) -> Self {
        self.migrate = true;
        self
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for flight catalogue operations.
    ///
    /// Adds, in dependency order:
    /// - Aircraft
    /// - Airport
    /// - Flight
    /// - Seat
    pub fn with_flight_tables(self) -> Self {
        self.with_table(Aircraft)
            .with_table(Airport)
            .with_table(Flight)
            .with_table(Seat)
    }

    /// Adds the identity tables: User and Passenger.
    pub fn with_identity_tables(self) -> Self {
        self.with_table(User).with_table(Passenger)
    }

    /// Adds every table a booking touches.
    ///
    /// Equivalent to `with_flight_tables().with_identity_tables()` followed by Booking.
    pub fn with_booking_tables(self) -> Self {
        self.with_flight_tables()
            .with_identity_tables()
            .with_table(Booking)
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context holding the prepared database connection
    /// - `Err(TestError::Database)` - Connecting, migrating or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.migrate {
            Migrator::up(setup.database().await?, None).await?;
        }
        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
