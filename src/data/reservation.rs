use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::model::{interval::Interval, reservation::CreateReservationParams};

/// Repository for reservation rows.
///
/// Generic over the connection so the overlap check and the insert that
/// depends on it can share one transaction. Read-only callers pass the plain
/// `DatabaseConnection`.
pub struct ReservationRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(
        &self,
        params: CreateReservationParams,
    ) -> Result<entity::reservation::Model, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            vehicle_id: Set(params.vehicle_id),
            user_id: Set(params.user_id),
            start_time: Set(params.start_time),
            end_time: Set(params.end_time),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        reservation.insert(self.conn).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(id)
            .one(self.conn)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn find_by_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::VehicleId.eq(vehicle_id))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.conn)
            .await
    }

    /// Reservations of the user that are in progress at `now`, i.e. whose
    /// interval contains the instant.
    pub async fn find_active_by_user(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .filter(entity::reservation::Column::StartTime.lte(now))
            .filter(entity::reservation::Column::EndTime.gte(now))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.conn)
            .await
    }

    /// Whether any reservation for the vehicle overlaps the interval,
    /// endpoints inclusive.
    pub async fn overlapping_exists(
        &self,
        vehicle_id: i32,
        interval: Interval,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::VehicleId.eq(vehicle_id))
            .filter(entity::reservation::Column::StartTime.lte(interval.end))
            .filter(entity::reservation::Column::EndTime.gte(interval.start))
            .count(self.conn)
            .await?;

        Ok(count > 0)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }
}
