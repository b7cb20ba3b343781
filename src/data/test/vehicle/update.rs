use super::*;

/// Tests partial update: set fields change, unset fields are preserved.
///
/// Expected: Ok with only the given fields changed
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, category.id)
        .brand("Ford")
        .capacity(5)
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    let updated = repo
        .update(
            vehicle.clone(),
            UpdateVehicleParams {
                capacity: Some(7),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.capacity, 7);
    assert_eq!(updated.brand, "Ford");
    assert_eq!(updated.plate, vehicle.plate);

    Ok(())
}
