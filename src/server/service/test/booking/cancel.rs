use super::*;

/// Tests cancelling a booking.
///
/// Expected: Ok with status cancelled and the seat free again; a second cancel fails
#[tokio::test]
async fn cancel_frees_seat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let flight = FlightFactory::new(db, aircraft.id, departure.id, arrival.id)
        .build()
        .await?;
    let (_, passenger) = create_passenger_with_user(db).await?;
    SeatFactory::new(db, flight.id).seat_number("5E").build().await?;

    let service = BookingService::new(db);
    let booked = service
        .create(booking_param(passenger.id, flight.id, Some("5E")))
        .await?;
    assert!(SeatRepository::new(db)
        .get_available(flight.id)
        .await?
        .is_empty());

    let cancelled = service.cancel(booked.booking.id).await?;
    assert_eq!(cancelled.booking.status, BookingStatus::Cancelled);
    assert_eq!(cancelled.seat_number, "5E");
    assert_eq!(
        SeatRepository::new(db).get_available(flight.id).await?.len(),
        1
    );

    let again = service.cancel(booked.booking.id).await;
    assert!(matches!(
        again,
        Err(AppError::BookingErr(BookingError::AlreadyCancelled))
    ));

    Ok(())
}

/// Tests cancelling a missing booking.
///
/// Expected: Err(BookingError::NotFound)
#[tokio::test]
async fn cancel_missing_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingService::new(db).cancel(1).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::NotFound))
    ));

    Ok(())
}
