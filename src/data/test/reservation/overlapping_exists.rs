use super::*;

fn jan(day: u32, hour: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, day, hour, 0, 0).unwrap()
}

/// Tests that a partially overlapping interval is reported as occupied.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_partial_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, vehicle) = factory::helpers::create_reservation_dependencies(db).await?;
    factory::reservation::ReservationFactory::new(db, vehicle.id, user.id)
        .start(jan(10, 0))
        .end(jan(12, 0))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let occupied = repo
        .overlapping_exists(vehicle.id, Interval::new(jan(11, 0), jan(14, 0)))
        .await?;

    assert!(occupied);

    Ok(())
}

/// Tests that an interval touching an existing reservation's endpoint counts
/// as overlap, since boundaries are inclusive.
///
/// Expected: Ok(true)
#[tokio::test]
async fn touching_endpoint_counts_as_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, vehicle) = factory::helpers::create_reservation_dependencies(db).await?;
    factory::reservation::ReservationFactory::new(db, vehicle.id, user.id)
        .start(jan(10, 0))
        .end(jan(12, 0))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let occupied = repo
        .overlapping_exists(vehicle.id, Interval::new(jan(12, 0), jan(14, 0)))
        .await?;

    assert!(occupied);

    Ok(())
}

/// Tests that a disjoint interval is not reported as occupied.
///
/// Expected: Ok(false)
#[tokio::test]
async fn disjoint_interval_is_free() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, vehicle) = factory::helpers::create_reservation_dependencies(db).await?;
    factory::reservation::ReservationFactory::new(db, vehicle.id, user.id)
        .start(jan(10, 0))
        .end(jan(12, 0))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let occupied = repo
        .overlapping_exists(vehicle.id, Interval::new(jan(13, 0), jan(14, 0)))
        .await?;

    assert!(!occupied);

    Ok(())
}

/// Tests that reservations on another vehicle do not affect the check.
///
/// Expected: Ok(false)
#[tokio::test]
async fn other_vehicle_reservations_are_ignored() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, vehicle) = factory::helpers::create_reservation_dependencies(db).await?;
    let other_vehicle = factory::vehicle::create_vehicle(db, category.id).await?;

    factory::reservation::ReservationFactory::new(db, other_vehicle.id, user.id)
        .start(jan(10, 0))
        .end(jan(12, 0))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let occupied = repo
        .overlapping_exists(vehicle.id, Interval::new(jan(10, 0), jan(12, 0)))
        .await?;

    assert!(!occupied);

    Ok(())
}

/// Tests that an interval fully containing an existing reservation is
/// reported as occupied.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_containing_interval() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, vehicle) = factory::helpers::create_reservation_dependencies(db).await?;
    factory::reservation::ReservationFactory::new(db, vehicle.id, user.id)
        .start(jan(10, 0))
        .end(jan(11, 0))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let occupied = repo
        .overlapping_exists(vehicle.id, Interval::new(jan(9, 0), jan(14, 0)))
        .await?;

    assert!(occupied);

    Ok(())
}
