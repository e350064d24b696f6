use super::*;

/// Tests that a search is cached and served without touching the database.
///
/// The flight is deleted behind the service's back; the cached result must still be
/// returned.
///
/// Expected: Ok with the cached flight list on the second search
#[tokio::test]
async fn serves_repeated_search_from_cache() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let flight = factory::create_flight(db, aircraft.id, departure.id, arrival.id).await?;

    let service = FlightService::new(db, &cache);
    let filter = AvailableFlightsParam {
        departure_airport_id: Some(departure.id),
        ..Default::default()
    };

    let first = service.get_available(filter.clone()).await?;
    assert_eq!(first.len(), 1);
    assert_eq!(cache.len().await, 1);

    crate::server::data::flight::FlightRepository::new(db)
        .soft_delete(flight.id)
        .await?;

    let second = service.get_available(filter).await?;
    assert_eq!(second, first);

    Ok(())
}

/// Tests that creating a flight invalidates cached searches.
///
/// Expected: Ok with the new flight visible in the next search
#[tokio::test]
async fn mutation_invalidates_cache() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    factory::create_flight(db, aircraft.id, departure.id, arrival.id).await?;

    let service = FlightService::new(db, &cache);
    assert_eq!(
        service
            .get_available(AvailableFlightsParam::default())
            .await?
            .len(),
        1
    );

    service
        .create(flight_param("SK700", aircraft.id, departure.id, arrival.id))
        .await?;
    assert_eq!(cache.len().await, 0);

    assert_eq!(
        service
            .get_available(AvailableFlightsParam::default())
            .await?
            .len(),
        2
    );

    Ok(())
}

/// Tests searching from an unknown airport.
///
/// Expected: Err(FlightError::SearchDepartureAirportNotFound) naming the ID
#[tokio::test]
async fn unknown_airport_is_reported() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let (_, departure, _) = create_flight_dependencies(db).await?;
    let service = FlightService::new(db, &cache);

    let result = service
        .get_available(AvailableFlightsParam {
            departure_airport_id: Some(4242),
            ..Default::default()
        })
        .await;
    assert!(matches!(
        result,
        Err(AppError::FlightErr(FlightError::SearchDepartureAirportNotFound(4242)))
    ));

    let result = service
        .get_available(AvailableFlightsParam {
            departure_airport_id: Some(departure.id),
            arrival_airport_id: Some(4343),
            ..Default::default()
        })
        .await;
    assert!(matches!(
        result,
        Err(AppError::FlightErr(FlightError::SearchArrivalAirportNotFound(4343)))
    ));

    Ok(())
}

/// Tests a search without matches.
///
/// Expected: Err(FlightError::NotFound) and nothing cached
#[tokio::test]
async fn empty_result_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let result = FlightService::new(db, &cache)
        .get_available(AvailableFlightsParam::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::FlightErr(FlightError::NotFound))
    ));
    assert_eq!(cache.len().await, 0);

    Ok(())
}
