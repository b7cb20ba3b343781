use super::*;

/// Tests that only reservations in progress at the given instant are
/// returned: ended and upcoming ones are excluded.
///
/// Expected: Ok with the ongoing reservation only
#[tokio::test]
async fn returns_only_reservations_in_progress() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, vehicle) = factory::helpers::create_reservation_dependencies(db).await?;
    let now = Utc::now();

    factory::reservation::ReservationFactory::new(db, vehicle.id, user.id)
        .start(now - Duration::days(4))
        .end(now - Duration::days(2))
        .build()
        .await?;
    let ongoing = factory::reservation::ReservationFactory::new(db, vehicle.id, user.id)
        .start(now - Duration::hours(1))
        .end(now + Duration::hours(1))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, vehicle.id, user.id)
        .start(now + Duration::days(1))
        .end(now + Duration::days(2))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let active = repo.find_active_by_user(user.id, now).await?;

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, ongoing.id);

    Ok(())
}

/// Tests the inclusive endpoints: reservations starting or ending exactly at
/// the queried instant count as in progress.
///
/// Expected: Ok with both boundary reservations included
#[tokio::test]
async fn interval_endpoints_count_as_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, vehicle) = factory::helpers::create_reservation_dependencies(db).await?;
    let now = Utc::now();

    let ending_now = factory::reservation::ReservationFactory::new(db, vehicle.id, user.id)
        .start(now - Duration::hours(2))
        .end(now)
        .build()
        .await?;
    let starting_now = factory::reservation::ReservationFactory::new(db, vehicle.id, user.id)
        .start(now)
        .end(now + Duration::hours(2))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let active = repo.find_active_by_user(user.id, now).await?;

    let ids: Vec<i32> = active.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![ending_now.id, starting_now.id]);

    Ok(())
}
