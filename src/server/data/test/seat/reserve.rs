use super::*;

/// Tests reserving a free seat.
///
/// Expected: Ok(true) and the seat no longer listed as available
#[tokio::test]
async fn reserves_free_seat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, flight) = create_flight_with_dependencies(db).await?;
    let seat = SeatFactory::new(db, flight.id)
        .seat_number("1A")
        .build()
        .await?;

    let repo = SeatRepository::new(db);
    assert!(repo.reserve(seat.id).await?);

    let stored = repo.find_by_number(flight.id, "1A").await?.unwrap();
    assert!(stored.is_reserved);

    Ok(())
}

/// Tests that a second reservation of the same seat fails.
///
/// The conditional update matches no row once the seat is reserved.
///
/// Expected: Ok(false) for the second attempt
#[tokio::test]
async fn refuses_double_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, flight) = create_flight_with_dependencies(db).await?;
    let seat = SeatFactory::new(db, flight.id).build().await?;

    let repo = SeatRepository::new(db);
    assert!(repo.reserve(seat.id).await?);
    assert!(!repo.reserve(seat.id).await?);

    Ok(())
}

/// Tests releasing a reserved seat.
///
/// Expected: Ok(true) and the seat can be reserved again
#[tokio::test]
async fn release_makes_seat_reservable() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, flight) = create_flight_with_dependencies(db).await?;
    let seat = SeatFactory::new(db, flight.id).reserved(true).build().await?;

    let repo = SeatRepository::new(db);
    assert!(repo.release(seat.id).await?);
    assert!(repo.reserve(seat.id).await?);

    Ok(())
}

/// Tests that deleted seats cannot be reserved.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_deleted_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, flight) = create_flight_with_dependencies(db).await?;
    let seat = SeatFactory::new(db, flight.id).deleted(true).build().await?;

    assert!(!SeatRepository::new(db).reserve(seat.id).await?);

    Ok(())
}
