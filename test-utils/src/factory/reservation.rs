//! Reservation factory for creating test reservation entities.
//!
//! The factory inserts rows directly through the entity layer, bypassing the
//! service-level availability check. Tests that need conflicting or already
//! started reservations use this to set up state the commit path would reject.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable intervals.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, vehicle.id, user.id)
///     .start(Utc::now() - Duration::hours(1))
///     .end(Utc::now() + Duration::hours(1))
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    vehicle_id: i32,
    user_id: i32,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - start_time: 1 day from now
    /// - end_time: 3 days from now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `vehicle_id` - Vehicle being reserved
    /// - `user_id` - Owning user
    ///
    /// # Returns
    /// - `ReservationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, vehicle_id: i32, user_id: i32) -> Self {
        Self {
            db,
            vehicle_id,
            user_id,
            start_time: Utc::now() + Duration::days(1),
            end_time: Utc::now() + Duration::days(3),
        }
    }

    /// Sets the reservation start instant.
    pub fn start(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the reservation end instant.
    pub fn end(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            user_id: ActiveValue::Set(self.user_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with the default upcoming interval.
///
/// Shorthand for `ReservationFactory::new(db, vehicle_id, user_id).build().await`.
pub async fn create_reservation(
    db: &DatabaseConnection,
    vehicle_id: i32,
    user_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, vehicle_id, user_id).build().await
}
