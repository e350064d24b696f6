use super::*;

fn day(year: i32, month: u32, day: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Tests that an empty filter returns every live flight ordered by departure.
///
/// Expected: Ok with deleted flight excluded and earliest departure first
#[tokio::test]
async fn returns_live_flights_in_departure_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let later = FlightFactory::new(db, aircraft.id, departure.id, arrival.id)
        .departure_date(Utc::now() + Duration::days(5))
        .build()
        .await?;
    let earlier = FlightFactory::new(db, aircraft.id, departure.id, arrival.id)
        .departure_date(Utc::now() + Duration::days(2))
        .build()
        .await?;
    FlightFactory::new(db, aircraft.id, departure.id, arrival.id)
        .deleted(true)
        .build()
        .await?;

    let flights = FlightRepository::new(db)
        .find_available(&AvailableFlightsParam::default())
        .await?;

    let ids: Vec<i32> = flights.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}

/// Tests filtering on route and departure day together.
///
/// Verifies that predicates compose and that the date filter covers the whole UTC day,
/// including a flight departing just before midnight.
///
/// Expected: Ok with only the flights matching both route and day
#[tokio::test]
async fn combines_route_and_day_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (aircraft, origin, destination) = create_flight_dependencies(db).await?;
    let other = factory::create_airport(db).await?;

    let morning = FlightFactory::new(db, aircraft.id, origin.id, destination.id)
        .departure_date(Utc.with_ymd_and_hms(2030, 3, 10, 6, 0, 0).unwrap())
        .build()
        .await?;
    let late = FlightFactory::new(db, aircraft.id, origin.id, destination.id)
        .departure_date(Utc.with_ymd_and_hms(2030, 3, 10, 23, 59, 0).unwrap())
        .build()
        .await?;
    // next day
    FlightFactory::new(db, aircraft.id, origin.id, destination.id)
        .departure_date(Utc.with_ymd_and_hms(2030, 3, 11, 0, 0, 0).unwrap())
        .build()
        .await?;
    // other route
    FlightFactory::new(db, aircraft.id, origin.id, other.id)
        .departure_date(Utc.with_ymd_and_hms(2030, 3, 10, 12, 0, 0).unwrap())
        .build()
        .await?;

    let flights = FlightRepository::new(db)
        .find_available(&AvailableFlightsParam {
            departure_airport_id: Some(origin.id),
            arrival_airport_id: Some(destination.id),
            departure_date: Some(day(2030, 3, 10)),
            arrival_date: None,
        })
        .await?;

    let ids: Vec<i32> = flights.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![morning.id, late.id]);

    Ok(())
}

/// Tests filtering on arrival day.
///
/// Expected: Ok with the overnight flight matched by its arrival day
#[tokio::test]
async fn filters_on_arrival_day() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (aircraft, origin, destination) = create_flight_dependencies(db).await?;
    let overnight = FlightFactory::new(db, aircraft.id, origin.id, destination.id)
        .departure_date(Utc.with_ymd_and_hms(2030, 5, 1, 22, 0, 0).unwrap())
        .duration(Duration::hours(4))
        .build()
        .await?;
    FlightFactory::new(db, aircraft.id, origin.id, destination.id)
        .departure_date(Utc.with_ymd_and_hms(2030, 5, 1, 8, 0, 0).unwrap())
        .build()
        .await?;

    let flights = FlightRepository::new(db)
        .find_available(&AvailableFlightsParam {
            arrival_date: Some(day(2030, 5, 2)),
            ..Default::default()
        })
        .await?;

    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].id, overnight.id);

    Ok(())
}
