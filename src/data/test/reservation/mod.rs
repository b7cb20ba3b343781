use crate::{
    data::reservation::ReservationRepository,
    model::{interval::Interval, reservation::CreateReservationParams},
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_active_by_user;
mod find_by_vehicle;
mod overlapping_exists;
