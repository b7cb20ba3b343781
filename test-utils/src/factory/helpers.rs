use sea_orm::{DatabaseConnection, DbErr};
use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Returns the next value of a process-wide sequence.
///
/// Used by factories to derive unique default names, emails, and plates so
/// multiple factory calls within one test never collide on unique columns.
///
/// # Returns
/// - `i64` - Monotonically increasing id
pub fn next_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Creates the entity chain a reservation depends on: a user, a category, and
/// a vehicle in that category.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, category, vehicle))` - Created dependency entities
/// - `Err(DbErr)` - Database error during any insert
///
/// # Example
///
/// ```rust,ignore
/// let (user, _category, vehicle) = factory::helpers::create_reservation_dependencies(db).await?;
/// ```
pub async fn create_reservation_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::vehicle::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let vehicle = crate::factory::vehicle::VehicleFactory::new(db, category.id)
        .build()
        .await?;

    Ok((user, category, vehicle))
}
