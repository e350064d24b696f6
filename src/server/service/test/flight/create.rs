use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::*;

/// Tests creating a flight with valid references.
///
/// Expected: Ok with the flight retrievable by ID
#[tokio::test]
async fn creates_flight() -> Result<(), AppError> {
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
        .create(flight_param("SK500", aircraft.id, departure.id, arrival.id))
        .await?;

    assert_eq!(service.get_by_id(flight.id).await?, flight);

    Ok(())
}

/// Tests that a duplicate flight number is rejected before references are checked.
///
/// The aircraft ID is also invalid, so the conflict must be reported first.
///
/// Expected: Err(FlightError::AlreadyExists)
#[tokio::test]
async fn duplicate_number_is_checked_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    FlightFactory::new(db, aircraft.id, departure.id, arrival.id)
        .flight_number("SK501")
        .build()
        .await?;

    let result = FlightService::new(db, &cache)
        .create(flight_param("SK501", 9999, departure.id, arrival.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::FlightErr(FlightError::AlreadyExists))
    ));

    Ok(())
}

/// Tests the order of the reference checks.
///
/// Expected: aircraft, then departure airport, then arrival airport reported missing
#[tokio::test]
async fn reports_first_missing_reference() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let service = FlightService::new(db, &cache);

    let result = service
        .create(flight_param("SK502", 9999, 9998, 9997))
        .await;
    assert!(matches!(
        result,
        Err(AppError::FlightErr(FlightError::AircraftNotFound))
    ));

    let result = service
        .create(flight_param("SK502", aircraft.id, 9998, 9997))
        .await;
    assert!(matches!(
        result,
        Err(AppError::FlightErr(FlightError::DepartureAirportNotFound))
    ));

    let result = service
        .create(flight_param("SK502", aircraft.id, departure.id, 9997))
        .await;
    assert!(matches!(
        result,
        Err(AppError::FlightErr(FlightError::ArrivalAirportNotFound))
    ));

    service
        .create(flight_param("SK502", aircraft.id, departure.id, arrival.id))
        .await?;

    Ok(())
}

/// Tests reusing the number of a deleted flight.
///
/// Expected: Ok once the first flight is deleted
#[tokio::test]
async fn reuses_number_after_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let service = FlightService::new(db, &cache);

    let first = service
        .create(flight_param("SK503", aircraft.id, departure.id, arrival.id))
        .await?;
    service.delete(first.id).await?;

    let second = service
        .create(flight_param("SK503", aircraft.id, departure.id, arrival.id))
        .await?;

    assert_ne!(first.id, second.id);
    assert!(matches!(
        service.get_by_id(first.id).await,
        Err(AppError::FlightErr(FlightError::NotFound))
    ));

    Ok(())
}

/// Tests that deleting a flight also deletes its seats.
///
/// Expected: Ok, with seat listing for the flight reporting the flight missing
#[tokio::test]
async fn delete_removes_flight_and_seats() -> Result<(), AppError> {
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

    let service = FlightService::new(db, &cache);
    service.delete(flight.id).await?;

    let seats = crate::server::data::seat::SeatRepository::new(db)
        .get_available(flight.id)
        .await?;
    assert!(seats.is_empty());
    assert!(matches!(
        service.delete(flight.id).await,
        Err(AppError::FlightErr(FlightError::NotFound))
    ));

    Ok(())
}

/// Tests two concurrent creates with the same flight number.
///
/// Both requests may pass the number check before either inserts; the partial unique
/// index must still refuse the second insert and the loser must see a conflict.
///
/// Expected: one Ok, one Err(FlightError::AlreadyExists), a single live row
#[tokio::test]
async fn concurrent_creates_keep_number_unique() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let service = FlightService::new(db, &cache);

    let (first, second) = tokio::join!(
        service.create(flight_param("SK999", aircraft.id, departure.id, arrival.id)),
        service.create(flight_param("SK999", aircraft.id, departure.id, arrival.id)),
    );

    let conflicts = [&first, &second]
        .into_iter()
        .filter(|r| matches!(r, Err(AppError::FlightErr(FlightError::AlreadyExists))))
        .count();
    assert_eq!(u8::from(first.is_ok()) + u8::from(second.is_ok()), 1);
    assert_eq!(conflicts, 1);

    let live = entity::prelude::Flight::find()
        .filter(entity::flight::Column::FlightNumber.eq("SK999"))
        .filter(entity::flight::Column::IsDeleted.eq(false))
        .count(db)
        .await?;
    assert_eq!(live, 1);

    Ok(())
}

/// Tests reusing the number of a soft-deleted flight under the migrated schema.
///
/// Expected: Ok with the new flight created
#[tokio::test]
async fn reuses_number_of_deleted_flight() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let (aircraft, departure, arrival) = create_flight_dependencies(db).await?;
    let service = FlightService::new(db, &cache);

    let old = service
        .create(flight_param("SK998", aircraft.id, departure.id, arrival.id))
        .await?;
    service.delete(old.id).await?;

    let new = service
        .create(flight_param("SK998", aircraft.id, departure.id, arrival.id))
        .await?;
    assert_ne!(new.id, old.id);

    Ok(())
}
