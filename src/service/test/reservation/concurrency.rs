use super::*;

/// Tests that two concurrent bookings for overlapping periods on the same
/// vehicle are serialized: exactly one commits and the other observes the
/// committed row and fails with a conflict.
#[tokio::test]
async fn concurrent_overlapping_bookings_yield_one_winner() -> Result<(), ReservationError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, vehicle) = factory::helpers::create_reservation_dependencies(db).await?;
    let other_user = factory::user::create_user(db).await?;

    // One shared lock registry, as in the running application
    let service = service(db);

    let first = service.create(CreateReservationParams {
        vehicle_id: vehicle.id,
        user_id: user.id,
        start_time: jan(10, 0),
        end_time: jan(12, 0),
    });
    let second = service.create(CreateReservationParams {
        vehicle_id: vehicle.id,
        user_id: other_user.id,
        start_time: jan(11, 0),
        end_time: jan(13, 0),
    });

    let (first, second) = tokio::join!(first, second);

    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one booking must win");

    let loser = if first.is_ok() { second } else { first };
    assert!(matches!(loser, Err(ReservationError::Conflict)));

    // Only the winning reservation is stored
    let all = service.list_all().await?;
    assert_eq!(all.len(), 1);

    Ok(())
}

/// Tests that concurrent bookings for different vehicles do not contend.
#[tokio::test]
async fn concurrent_bookings_on_different_vehicles_both_succeed(
) -> Result<(), ReservationError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, vehicle) = factory::helpers::create_reservation_dependencies(db).await?;
    let other_vehicle = factory::vehicle::create_vehicle(db, category.id).await?;

    let service = service(db);

    let first = service.create(CreateReservationParams {
        vehicle_id: vehicle.id,
        user_id: user.id,
        start_time: jan(10, 0),
        end_time: jan(12, 0),
    });
    let second = service.create(CreateReservationParams {
        vehicle_id: other_vehicle.id,
        user_id: user.id,
        start_time: jan(10, 0),
        end_time: jan(12, 0),
    });

    let (first, second) = tokio::join!(first, second);

    assert!(first.is_ok());
    assert!(second.is_ok());

    Ok(())
}
