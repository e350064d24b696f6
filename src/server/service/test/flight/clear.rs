use super::*;

/// Tests clearing all flights.
///
/// Expected: Ok with flight and seat counts, airports left untouched
#[tokio::test]
async fn clears_flights_and_seats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let first = factory::create_flight(db, aircraft.id, departure.id, arrival.id).await?;
    factory::create_flight(db, aircraft.id, departure.id, arrival.id).await?;
    SeatFactory::new(db, first.id).build().await?;
    SeatFactory::new(db, first.id).build().await?;
    SeatFactory::new(db, first.id).build().await?;

    let summary = FlightService::new(db, &cache).clear().await?;

    assert_eq!(summary.flights, 2);
    assert_eq!(summary.seats, 3);
    assert_eq!(summary.airports, 0);
    assert!(crate::server::data::airport::AirportRepository::new(db)
        .exists(departure.id)
        .await?);

    Ok(())
}

/// Tests clearing every flight-related table.
///
/// Expected: Ok with all four counts and a matching total
#[tokio::test]
async fn clear_all_includes_airports_and_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let flight = factory::create_flight(db, aircraft.id, departure.id, arrival.id).await?;
    SeatFactory::new(db, flight.id).build().await?;

    let summary = FlightService::new(db, &cache).clear_all().await?;

    assert_eq!(summary.flights, 1);
    assert_eq!(summary.seats, 1);
    assert_eq!(summary.airports, 2);
    assert_eq!(summary.aircraft, 1);
    assert_eq!(summary.total(), 5);

    Ok(())
}
