use super::*;

/// Tests that update stores the path id, not the id carried by the value.
///
/// Expected: Ok(Flight) with id equal to the requested id
#[tokio::test]
async fn forces_requested_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::create_flight(db).await?;

    let service = FlightService::new(FlightRepository::new(db));
    let updated = service
        .update(
            seeded.id,
            Flight {
                id: 99,
                name: "AI102".to_string(),
                source: "Delhi".to_string(),
                destination: "Goa".to_string(),
                ticket_price: Some(4500.0),
            },
        )
        .await?;

    assert_eq!(updated.id, seeded.id);
    assert_eq!(updated.name, "AI102");
    assert_eq!(updated.destination, "Goa");

    // Nothing was written under the id carried by the value
    let stray = entity::prelude::Flight::find_by_id(99).one(db).await?;
    assert!(stray.is_none());
    assert_eq!(service.get(seeded.id).await?, updated);

    Ok(())
}

/// Tests updating an id with no row.
///
/// Expected: Err(FlightError::NotFound) and no row created
#[tokio::test]
async fn fails_with_not_found_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FlightService::new(FlightRepository::new(db));
    let result = service
        .update(
            5,
            Flight {
                id: 5,
                name: "AI555".to_string(),
                source: "Delhi".to_string(),
                destination: "Goa".to_string(),
                ticket_price: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::FlightErr(FlightError::NotFound(5)))
    ));

    let flights = service.get_all().await?;
    assert!(flights.is_empty());

    Ok(())
}
