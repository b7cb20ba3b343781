use super::*;

/// Tests cancelling an upcoming reservation as its owner.
///
/// Expected: Ok and the vehicle is bookable again for the period
#[tokio::test]
async fn owner_cancels_upcoming_reservation() -> Result<(), ReservationError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, vehicle) = factory::helpers::create_reservation_dependencies(db).await?;
    let reservation = factory::reservation::ReservationFactory::new(db, vehicle.id, user.id)
        .start(Utc::now() + Duration::hours(1))
        .end(Utc::now() + Duration::hours(3))
        .build()
        .await?;

    let service = service(db);
    service.cancel(reservation.id, &user).await?;

    assert!(service.list_for_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests that an administrator may cancel another user's reservation.
///
/// Expected: Ok
#[tokio::test]
async fn admin_cancels_any_reservation() -> Result<(), ReservationError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, vehicle) = factory::helpers::create_reservation_dependencies(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let reservation = factory::reservation::create_reservation(db, vehicle.id, user.id).await?;

    let service = service(db);
    service.cancel(reservation.id, &admin).await?;

    assert!(service.list_for_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests that another client may not cancel someone else's reservation.
///
/// Expected: Err(Forbidden) and the reservation survives
#[tokio::test]
async fn other_client_cannot_cancel() -> Result<(), ReservationError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, vehicle) = factory::helpers::create_reservation_dependencies(db).await?;
    let other = factory::user::create_user(db).await?;
    let reservation = factory::reservation::create_reservation(db, vehicle.id, user.id).await?;

    let service = service(db);
    let result = service.cancel(reservation.id, &other).await;

    assert!(matches!(result, Err(ReservationError::Forbidden)));
    assert_eq!(service.list_for_user(user.id).await?.len(), 1);

    Ok(())
}

/// Tests that a reservation that already started cannot be cancelled, even
/// by its owner.
///
/// Expected: Err(TooLate) and the reservation survives
#[tokio::test]
async fn started_reservation_cannot_be_cancelled() -> Result<(), ReservationError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, vehicle) = factory::helpers::create_reservation_dependencies(db).await?;
    let reservation = factory::reservation::ReservationFactory::new(db, vehicle.id, user.id)
        .start(Utc::now() - Duration::seconds(1))
        .end(Utc::now() + Duration::hours(2))
        .build()
        .await?;

    let service = service(db);
    let result = service.cancel(reservation.id, &user).await;

    assert!(matches!(result, Err(ReservationError::TooLate)));
    assert_eq!(service.list_for_user(user.id).await?.len(), 1);

    Ok(())
}

/// Tests cancelling a reservation that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_reservation_is_not_found() -> Result<(), ReservationError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = service(db);
    let result = service.cancel(999999, &user).await;

    assert!(matches!(result, Err(ReservationError::NotFound(_))));

    Ok(())
}
