use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::interval::Interval;

/// Reservation as exposed through the API.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: i32,
    pub vehicle_id: i32,
    pub user_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            user_id: entity.user_id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for booking a vehicle.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub vehicle_id: i32,
    pub user_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl CreateReservationParams {
    pub fn interval(&self) -> Interval {
        Interval::new(self.start_time, self.end_time)
    }
}
