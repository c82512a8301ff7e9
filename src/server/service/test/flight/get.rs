use super::*;

/// Tests getting an existing flight.
///
/// Expected: Ok(Flight)
#[tokio::test]
async fn gets_existing_flight() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::create_flight(db).await?;

    let service = FlightService::new(FlightRepository::new(db));
    let flight = service.get(seeded.id).await?;

    assert_eq!(flight, Flight::from_entity(seeded));

    Ok(())
}

/// Tests getting an id that was never assigned.
///
/// Expected: Err(FlightError::NotFound) carrying the requested id
#[tokio::test]
async fn fails_with_not_found_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FlightService::new(FlightRepository::new(db));
    let result = service.get(31).await;

    match result {
        Err(AppError::FlightErr(err)) => assert_eq!(err, FlightError::NotFound(31)),
        other => panic!("expected not found, got {:?}", other),
    }

    Ok(())
}
