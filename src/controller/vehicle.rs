use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::MessageDto,
        interval::Interval,
        vehicle::{CreateVehicleParams, UpdateVehicleParams, VehicleListFilter},
    },
    service::{reservation::ReservationService, vehicle::VehicleService},
    state::AppState,
};

#[derive(Deserialize)]
pub struct CreateVehicleDto {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub plate: String,
    pub capacity: i32,
    pub category_id: i32,
}

#[derive(Deserialize)]
pub struct UpdateVehicleDto {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub plate: Option<String>,
    pub capacity: Option<i32>,
    pub category_id: Option<i32>,
}

#[derive(Deserialize)]
pub struct VehicleListQuery {
    pub search: Option<String>,
    pub category_id: Option<i32>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

/// Time range for availability queries, RFC 3339 timestamps.
#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct AvailabilityDto {
    pub vehicle_id: i32,
    pub available: bool,
}

/// GET /api/vehicles
/// List the fleet with optional search, category filter, and pagination.
pub async fn list(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<VehicleListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let vehicle_service = VehicleService::new(state.db.clone());
    let vehicles = vehicle_service
        .list(VehicleListFilter {
            search: query.search,
            category_id: query.category_id,
            skip: query.skip,
            limit: query.limit,
        })
        .await?;

    Ok(Json(vehicles))
}

/// POST /api/vehicles
/// Register a vehicle, administrators only.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let vehicle_service = VehicleService::new(state.db.clone());
    let vehicle = vehicle_service
        .create(CreateVehicleParams {
            brand: dto.brand,
            model: dto.model,
            year: dto.year,
            plate: dto.plate,
            capacity: dto.capacity,
            category_id: dto.category_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// GET /api/vehicles/available
/// List vehicles free for the whole requested period.
pub async fn list_available(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation_service =
        ReservationService::new(state.db.clone(), state.vehicle_locks.clone());
    let vehicles = reservation_service
        .list_available_vehicles(Interval::new(query.start_time, query.end_time))
        .await?;

    Ok(Json(vehicles))
}

/// GET /api/vehicles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let vehicle_service = VehicleService::new(state.db.clone());
    let vehicle = vehicle_service.get_by_id(id).await?;

    Ok(Json(vehicle))
}

/// PUT /api/vehicles/{id}
/// Update a vehicle, administrators only.
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let vehicle_service = VehicleService::new(state.db.clone());
    let vehicle = vehicle_service
        .update(
            id,
            UpdateVehicleParams {
                brand: dto.brand,
                model: dto.model,
                year: dto.year,
                plate: dto.plate,
                capacity: dto.capacity,
                category_id: dto.category_id,
            },
        )
        .await?;

    Ok(Json(vehicle))
}

/// DELETE /api/vehicles/{id}
/// Remove a vehicle, administrators only.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let vehicle_service = VehicleService::new(state.db.clone());
    vehicle_service.delete(id).await?;

    Ok(Json(MessageDto {
        message: "Vehicle deleted".to_string(),
    }))
}

/// GET /api/vehicles/{id}/availability
/// Check whether one vehicle is free for the requested period.
pub async fn check_availability(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation_service =
        ReservationService::new(state.db.clone(), state.vehicle_locks.clone());
    let available = reservation_service
        .check_availability(id, Interval::new(query.start_time, query.end_time))
        .await?;

    Ok(Json(AvailabilityDto {
        vehicle_id: id,
        available,
    }))
}
