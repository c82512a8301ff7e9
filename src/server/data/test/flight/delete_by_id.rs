use super::*;

/// Tests deleting a flight by id.
///
/// Expected: Ok with row removed
#[tokio::test]
async fn deletes_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::create_flight(db).await?;
    let kept = factory::create_flight(db).await?;

    let repo = FlightRepository::new(db);
    repo.delete_by_id(seeded.id).await?;

    let db_flight = entity::prelude::Flight::find_by_id(seeded.id)
        .one(db)
        .await?;
    assert!(db_flight.is_none());

    // Other rows are untouched
    let db_kept = entity::prelude::Flight::find_by_id(kept.id).one(db).await?;
    assert!(db_kept.is_some());

    Ok(())
}

/// Tests deleting a flight that does not exist.
///
/// Expected: Ok(())
#[tokio::test]
async fn deleting_missing_flight_is_not_an_error() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    let result = repo.delete_by_id(12345).await;

    assert!(result.is_ok());

    Ok(())
}
