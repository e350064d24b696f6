use super::*;

/// Tests soft-deleting a flight.
///
/// Verifies that the row stays in the table with the deleted flag set and is no longer
/// visible through `find_by_id`.
///
/// Expected: Ok(true) on first delete, Ok(false) on second
#[tokio::test]
async fn marks_flight_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let flight = factory::create_flight(db, aircraft.id, departure.id, arrival.id).await?;

    let repo = FlightRepository::new(db);
    assert!(repo.soft_delete(flight.id).await?);
    assert!(!repo.soft_delete(flight.id).await?);
    assert!(repo.find_by_id(flight.id).await?.is_none());

    let stored = entity::prelude::Flight::find_by_id(flight.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_deleted);

    Ok(())
}

/// Tests bulk soft deletion.
///
/// Expected: Ok with only live flights counted
#[tokio::test]
async fn soft_delete_all_counts_live_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    factory::create_flight(db, aircraft.id, departure.id, arrival.id).await?;
    factory::create_flight(db, aircraft.id, departure.id, arrival.id).await?;
    FlightFactory::new(db, aircraft.id, departure.id, arrival.id)
        .deleted(true)
        .build()
        .await?;

    assert_eq!(FlightRepository::new(db).soft_delete_all().await?, 2);

    Ok(())
}
