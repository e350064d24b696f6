use super::*;

/// Tests listing airports.
///
/// Expected: Ok with live airports ordered by code
#[tokio::test]
async fn lists_live_airports_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AirportFactory::new(db).code("LHR").build().await?;
    AirportFactory::new(db).code("CDG").build().await?;
    AirportFactory::new(db).code("AMS").deleted(true).build().await?;

    let airports = AirportRepository::new(db).get_all().await?;
    let codes: Vec<&str> = airports.iter().map(|a| a.code.as_str()).collect();

    assert_eq!(codes, vec!["CDG", "LHR"]);

    Ok(())
}

/// Tests looking up a deleted airport by ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_deleted_airport() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airport = AirportFactory::new(db).deleted(true).build().await?;

    let repo = AirportRepository::new(db);
    assert!(repo.find_by_id(airport.id).await?.is_none());
    assert!(!repo.exists(airport.id).await?);

    Ok(())
}
