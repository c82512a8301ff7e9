use super::*;

/// Tests deleting a flight.
///
/// Expected: 200 with plain text confirmation
#[tokio::test]
async fn returns_confirmation_text() {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::create_flight(db).await.unwrap();

    let (status, body) = send(
        app(db),
        empty_request("DELETE", &format!("/flight/{}", seeded.id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), format!("Flight ID: {}", seeded.id));

    let stored = entity::prelude::Flight::find_by_id(seeded.id)
        .one(db)
        .await
        .unwrap();
    assert!(stored.is_none());
}

/// Tests deleting an id with no row.
///
/// Expected: 200 with confirmation text
#[tokio::test]
async fn deleting_unknown_id_succeeds() {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), empty_request("DELETE", "/flight/321")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), "Flight ID: 321");
}
