use super::*;

/// Tests that only the vehicle's reservations are returned.
///
/// Expected: Ok with the vehicle's reservations only
#[tokio::test]
async fn returns_only_reservations_of_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, vehicle) = factory::helpers::create_reservation_dependencies(db).await?;
    let other_vehicle = factory::vehicle::create_vehicle(db, category.id).await?;

    let own = factory::reservation::create_reservation(db, vehicle.id, user.id).await?;
    factory::reservation::ReservationFactory::new(db, other_vehicle.id, user.id)
        .start(Utc::now() + Duration::days(5))
        .end(Utc::now() + Duration::days(6))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.find_by_vehicle(vehicle.id).await?;

    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].id, own.id);

    Ok(())
}
