use super::*;

/// Tests creating a flight.
///
/// Verifies that the repository inserts the row and returns it with a
/// storage-assigned id.
///
/// Expected: Ok(Flight) with id assigned
#[tokio::test]
async fn creates_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    let created = repo.create(create_param("AI101")).await?;

    assert!(created.id > 0);
    assert_eq!(created.name, "AI101");
    assert_eq!(created.source, "Delhi");
    assert_eq!(created.destination, "Mumbai");
    assert_eq!(created.ticket_price, Some(5000.0));

    let db_flight = entity::prelude::Flight::find_by_id(created.id)
        .one(db)
        .await?;
    assert!(db_flight.is_some());

    Ok(())
}

/// Tests creating flights assigns distinct ids.
///
/// Expected: Ok with different ids
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    let first = repo.create(create_param("AI101")).await?;
    let second = repo.create(create_param("AI101")).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that no field validation is applied on insert.
///
/// Expected: Ok(Flight) with empty strings, negative price preserved
#[tokio::test]
async fn accepts_empty_strings_and_negative_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    let created = repo
        .create(CreateFlightParam {
            name: String::new(),
            source: String::new(),
            destination: String::new(),
            ticket_price: Some(-1.5),
        })
        .await?;

    assert_eq!(created.name, "");
    assert_eq!(created.ticket_price, Some(-1.5));

    Ok(())
}

/// Tests that create fails when the flight table is missing.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    let result = repo.create(create_param("AI101")).await;

    assert!(result.is_err());

    Ok(())
}
