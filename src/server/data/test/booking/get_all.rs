use super::*;

/// Tests listing bookings newest first and filtering by passenger.
///
/// Expected: Ok with the passenger filter applied and the latest booking first
#[tokio::test]
async fn lists_newest_first_with_passenger_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, flight) = create_flight_with_dependencies(db).await?;
    let (_, passenger) = create_passenger_with_user(db).await?;
    let other = factory::create_passenger(db).await?;
    let seat1 = SeatFactory::new(db, flight.id).reserved(true).build().await?;
    let seat2 = SeatFactory::new(db, flight.id).reserved(true).build().await?;
    let seat3 = SeatFactory::new(db, flight.id).reserved(true).build().await?;

    let first = factory::create_booking(db, passenger.id, flight.id, seat1.id).await?;
    let second = factory::create_booking(db, passenger.id, flight.id, seat2.id).await?;
    factory::create_booking(db, other.id, flight.id, seat3.id).await?;

    let repo = BookingRepository::new(db);
    let all = repo.get_all(None).await?;
    let mine = repo.get_all(Some(passenger.id)).await?;

    assert_eq!(all.len(), 3);
    let ids: Vec<i32> = mine.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert!(mine.iter().all(|b| b.status == BookingStatus::Confirmed));

    Ok(())
}
