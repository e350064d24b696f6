use super::*;

/// Tests that a live flight number is reported as taken.
///
/// Expected: Ok(true)
#[tokio::test]
async fn finds_existing_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    FlightFactory::new(db, aircraft.id, departure.id, arrival.id)
        .flight_number("SK200")
        .build()
        .await?;

    let repo = FlightRepository::new(db);
    assert!(repo.exists_by_number("SK200", None).await?);
    assert!(!repo.exists_by_number("SK201", None).await?);

    Ok(())
}

/// Tests that soft-deleted flights free their number for reuse.
///
/// Expected: Ok(false) for a number only used by a deleted flight
#[tokio::test]
async fn ignores_deleted_flights() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    FlightFactory::new(db, aircraft.id, departure.id, arrival.id)
        .flight_number("SK300")
        .deleted(true)
        .build()
        .await?;

    assert!(
        !FlightRepository::new(db)
            .exists_by_number("SK300", None)
            .await?
    );

    Ok(())
}

/// Tests excluding the flight being edited from the uniqueness check.
///
/// Expected: Ok(false) when the only match is the excluded flight
#[tokio::test]
async fn excludes_edited_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let flight = FlightFactory::new(db, aircraft.id, departure.id, arrival.id)
        .flight_number("SK400")
        .build()
        .await?;

    let repo = FlightRepository::new(db);
    assert!(!repo.exists_by_number("SK400", Some(flight.id)).await?);
    assert!(repo.exists_by_number("SK400", Some(flight.id + 1)).await?);

    Ok(())
}
