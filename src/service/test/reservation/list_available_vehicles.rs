use super::*;

/// Tests that a booked vehicle drops out of the availability listing while a
/// free one stays in.
///
/// Expected: Ok with the free vehicle only
#[tokio::test]
async fn lists_only_free_vehicles() -> Result<(), ReservationError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, booked) = factory::helpers::create_reservation_dependencies(db).await?;
    let free = factory::vehicle::create_vehicle(db, category.id).await?;

    factory::reservation::ReservationFactory::new(db, booked.id, user.id)
        .start(jan(10, 0))
        .end(jan(12, 0))
        .build()
        .await?;

    let service = service(db);
    let available = service
        .list_available_vehicles(Interval::new(jan(10, 0), jan(11, 0)))
        .await?;

    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, free.id);

    Ok(())
}

/// Tests that an inverted interval is rejected.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_inverted_interval() -> Result<(), ReservationError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = service(db);
    let result = service
        .list_available_vehicles(Interval::new(jan(12, 0), jan(10, 0)))
        .await;

    assert!(matches!(result, Err(ReservationError::Validation(_))));

    Ok(())
}

/// Tests that an empty fleet yields an empty listing rather than an error.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn empty_fleet_yields_empty_listing() -> Result<(), ReservationError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = service(db);
    let available = service
        .list_available_vehicles(Interval::new(jan(10, 0), jan(11, 0)))
        .await?;

    assert!(available.is_empty());

    Ok(())
}
