use crate::{
    error::reservation::ReservationError,
    model::{interval::Interval, reservation::CreateReservationParams},
    service::reservation::{locks::VehicleLockRegistry, ReservationService},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod cancel;
mod concurrency;
mod list_available_vehicles;

fn service(db: &DatabaseConnection) -> ReservationService {
    ReservationService::new(db.clone(), VehicleLockRegistry::new())
}

fn jan(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
}
