use super::*;

/// Tests listing free seats.
///
/// Verifies that reserved and deleted seats are excluded and the rest are ordered by
/// seat number.
///
/// Expected: Ok with free seats in seat number order
#[tokio::test]
async fn lists_free_seats_in_number_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, flight) = create_flight_with_dependencies(db).await?;
    SeatFactory::new(db, flight.id).seat_number("3C").build().await?;
    SeatFactory::new(db, flight.id).seat_number("1A").build().await?;
    SeatFactory::new(db, flight.id)
        .seat_number("2B")
        .reserved(true)
        .build()
        .await?;
    SeatFactory::new(db, flight.id)
        .seat_number("1B")
        .deleted(true)
        .build()
        .await?;

    let repo = SeatRepository::new(db);
    let seats = repo.get_available(flight.id).await?;
    let numbers: Vec<&str> = seats.iter().map(|s| s.seat_number.as_str()).collect();

    assert_eq!(numbers, vec!["1A", "3C"]);
    assert_eq!(
        repo.first_available(flight.id).await?.unwrap().seat_number,
        "1A"
    );

    Ok(())
}

/// Tests a fully reserved flight.
///
/// Expected: Ok with no first available seat
#[tokio::test]
async fn no_free_seat_on_full_flight() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, flight) = create_flight_with_dependencies(db).await?;
    SeatFactory::new(db, flight.id).reserved(true).build().await?;

    assert!(SeatRepository::new(db)
        .first_available(flight.id)
        .await?
        .is_none());

    Ok(())
}
