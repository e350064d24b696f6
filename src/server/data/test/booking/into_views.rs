use super::*;

/// Tests resolving display names for bookings.
///
/// Expected: Ok with passenger name, flight number and seat number attached
#[tokio::test]
async fn attaches_display_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, flight) = create_flight_with_dependencies(db).await?;
    let (_, passenger) = create_passenger_with_user(db).await?;
    let seat = SeatFactory::new(db, flight.id)
        .seat_number("7F")
        .reserved(true)
        .build()
        .await?;
    let booking = factory::create_booking(db, passenger.id, flight.id, seat.id).await?;

    let view = BookingRepository::new(db)
        .find_view_by_id(booking.id)
        .await?
        .unwrap();

    assert_eq!(view.passenger_name, passenger.name);
    assert_eq!(view.flight_number, flight.flight_number);
    assert_eq!(view.seat_number, "7F");

    Ok(())
}

/// Tests a lookup for a missing booking.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_booking_has_no_view() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(BookingRepository::new(db)
        .find_view_by_id(99)
        .await?
        .is_none());

    Ok(())
}
