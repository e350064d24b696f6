//! Shared helper utilities for factory methods.
//!
//! Provides unique-value generation and convenience methods for creating entities
//! together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates the aircraft and the two airports a flight needs.
///
/// # Returns
/// - `Ok((aircraft, departure_airport, arrival_airport))`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::aircraft::Model,
        entity::airport::Model,
        entity::airport::Model,
    ),
    DbErr,
> {
    let aircraft = crate::factory::aircraft::create_aircraft(db).await?;
    let departure = crate::factory::airport::create_airport(db).await?;
    let arrival = crate::factory::airport::create_airport(db).await?;

    Ok((aircraft, departure, arrival))
}

/// Creates a complete flight with its aircraft and airports.
///
/// # Returns
/// - `Ok((aircraft, departure_airport, arrival_airport, flight))`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::aircraft::Model,
        entity::airport::Model,
        entity::airport::Model,
        entity::flight::Model,
    ),
    DbErr,
> {
    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let flight =
        crate::factory::flight::create_flight(db, aircraft.id, departure.id, arrival.id).await?;

    Ok((aircraft, departure, arrival, flight))
}

/// Creates a user and the passenger linked to it.
///
/// # Returns
/// - `Ok((user, passenger))`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_passenger_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::passenger::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let passenger = crate::factory::passenger::PassengerFactory::new(db)
        .user_id(Some(user.id))
        .name(format!("{} {}", user.first_name, user.last_name))
        .passport_number(user.passport_number.clone())
        .build()
        .await?;

    Ok((user, passenger))
}
