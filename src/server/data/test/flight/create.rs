use super::*;

/// Tests creating a flight.
///
/// Verifies that the repository inserts the flight, copies the departure date into
/// `flight_date` and stores the status discriminant.
///
/// Expected: Ok with flight created
#[tokio::test]
async fn creates_flight() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let departure_date = Utc::now() + Duration::days(3);

    let flight = FlightRepository::new(db)
        .create(CreateFlightParam {
            flight_number: "SK101".to_string(),
            aircraft_id: aircraft.id,
            departure_airport_id: departure.id,
            arrival_airport_id: arrival.id,
            departure_date,
            arrival_date: departure_date + Duration::hours(2),
            duration_minutes: 120,
            status: FlightStatus::Delay,
            price: 120.5,
        })
        .await?;

    assert!(flight.id > 0);
    assert_eq!(flight.flight_number, "SK101");
    assert_eq!(flight.flight_date, flight.departure_date);
    assert_eq!(flight.status, FlightStatus::Delay);

    let stored = entity::prelude::Flight::find_by_id(flight.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, 2);
    assert!(!stored.is_deleted);

    Ok(())
}

/// Tests reading a flight whose stored status is out of range.
///
/// Expected: Err with internal error instead of a silently defaulted status
#[tokio::test]
async fn fails_on_unknown_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let flight = FlightFactory::new(db, aircraft.id, departure.id, arrival.id)
        .status(42)
        .build()
        .await?;

    let result = FlightRepository::new(db).find_by_id(flight.id).await;

    assert!(matches!(result, Err(AppError::Internal(_))));

    Ok(())
}
