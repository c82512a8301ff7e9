use super::*;

/// Tests finding an existing flight by id.
///
/// Expected: Ok(Some(Flight))
#[tokio::test]
async fn finds_existing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::flight::FlightFactory::new(db)
        .name("AI101")
        .ticket_price(None)
        .build()
        .await?;

    let repo = FlightRepository::new(db);
    let found = repo.find_by_id(seeded.id).await?;

    assert_eq!(found, Some(Flight::from_entity(seeded)));

    Ok(())
}

/// Tests finding a flight that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    let found = repo.find_by_id(404).await?;

    assert!(found.is_none());

    Ok(())
}
