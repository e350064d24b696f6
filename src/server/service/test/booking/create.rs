use super::*;

/// Tests booking without a seat preference.
///
/// Expected: Ok with the lowest-numbered free seat reserved and the flight price copied
#[tokio::test]
async fn picks_first_free_seat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let flight = FlightFactory::new(db, aircraft.id, departure.id, arrival.id)
        .price(310.0)
        .build()
        .await?;
    let (_, passenger) = create_passenger_with_user(db).await?;
    SeatFactory::new(db, flight.id).seat_number("2A").build().await?;
    SeatFactory::new(db, flight.id).seat_number("1A").reserved(true).build().await?;
    SeatFactory::new(db, flight.id).seat_number("1B").build().await?;

    let view = BookingService::new(db)
        .create(booking_param(passenger.id, flight.id, None))
        .await?;

    assert_eq!(view.seat_number, "1B");
    assert_eq!(view.booking.status, BookingStatus::Confirmed);
    assert_eq!(view.booking.price, 310.0);
    assert_eq!(view.passenger_name, passenger.name);

    let free = SeatRepository::new(db).get_available(flight.id).await?;
    assert_eq!(free.len(), 1);
    assert_eq!(free[0].seat_number, "2A");

    Ok(())
}

/// Tests requesting a seat that is already reserved.
///
/// Expected: Err(SeatError::AlreadyReserved) and no booking stored
#[tokio::test]
async fn requested_seat_taken() -> Result<(), AppError> {
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
    SeatFactory::new(db, flight.id).seat_number("3C").reserved(true).build().await?;

    let service = BookingService::new(db);
    let result = service
        .create(booking_param(passenger.id, flight.id, Some("3C")))
        .await;

    assert!(matches!(
        result,
        Err(AppError::SeatErr(SeatError::AlreadyReserved))
    ));
    assert!(service.get_all(Some(passenger.id)).await?.is_empty());

    Ok(())
}

/// Tests booking a flight that no longer takes bookings.
///
/// Expected: Err(BookingError::FlightNotOpen) for a completed flight
#[tokio::test]
async fn closed_flight_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let flight = FlightFactory::new(db, aircraft.id, departure.id, arrival.id)
        .status(4)
        .build()
        .await?;
    let (_, passenger) = create_passenger_with_user(db).await?;
    SeatFactory::new(db, flight.id).build().await?;

    let result = BookingService::new(db)
        .create(booking_param(passenger.id, flight.id, None))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::FlightNotOpen))
    ));

    Ok(())
}

/// Tests booking a full flight.
///
/// Expected: Err(BookingError::NoSeatsAvailable)
#[tokio::test]
async fn full_flight_has_no_seats() -> Result<(), AppError> {
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
    SeatFactory::new(db, flight.id).reserved(true).build().await?;

    let result = BookingService::new(db)
        .create(booking_param(passenger.id, flight.id, None))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::NoSeatsAvailable))
    ));

    Ok(())
}
