use super::*;

/// Tests editing a flight while keeping its own number.
///
/// Expected: Ok with the new values stored
#[tokio::test]
async fn updates_flight_keeping_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let service = FlightService::new(db, &cache);
    let flight = service
        .create(flight_param("SK600", aircraft.id, departure.id, arrival.id))
        .await?;

    let mut changed = flight_param("SK600", aircraft.id, departure.id, arrival.id);
    changed.price = 99.0;
    changed.status = FlightStatus::Delay;

    let updated = service
        .update(UpdateFlightParam {
            id: flight.id,
            flight: changed,
        })
        .await?;

    assert_eq!(updated.id, flight.id);
    assert_eq!(updated.price, 99.0);
    assert_eq!(updated.status, FlightStatus::Delay);

    Ok(())
}

/// Tests taking another flight's number during an edit.
///
/// Expected: Err(FlightError::AlreadyExists)
#[tokio::test]
async fn rejects_number_of_other_flight() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let service = FlightService::new(db, &cache);
    service
        .create(flight_param("SK601", aircraft.id, departure.id, arrival.id))
        .await?;
    let second = service
        .create(flight_param("SK602", aircraft.id, departure.id, arrival.id))
        .await?;

    let result = service
        .update(UpdateFlightParam {
            id: second.id,
            flight: flight_param("SK601", aircraft.id, departure.id, arrival.id),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::FlightErr(FlightError::AlreadyExists))
    ));

    Ok(())
}

/// Tests editing a flight that does not exist.
///
/// Expected: Err(FlightError::NotFound)
#[tokio::test]
async fn missing_flight_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;

    let result = FlightService::new(db, &cache)
        .update(UpdateFlightParam {
            id: 404,
            flight: flight_param("SK603", aircraft.id, departure.id, arrival.id),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::FlightErr(FlightError::NotFound))
    ));

    Ok(())
}
