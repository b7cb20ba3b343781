use crate::{
    data::vehicle::VehicleRepository,
    model::{
        interval::Interval,
        vehicle::{CreateVehicleParams, UpdateVehicleParams, VehicleListFilter},
    },
};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod update;
