use super::*;

/// Tests the airport code uniqueness lookup.
///
/// Expected: Ok(true) for a live code, Ok(false) for one only held by a deleted airport
#[tokio::test]
async fn checks_live_codes_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AirportFactory::new(db).code("JFK").build().await?;
    AirportFactory::new(db).code("LGA").deleted(true).build().await?;

    let repo = AirportRepository::new(db);
    assert!(repo.exists_by_code("JFK").await?);
    assert!(!repo.exists_by_code("LGA").await?);

    Ok(())
}
