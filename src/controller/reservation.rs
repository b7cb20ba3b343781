use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{api::MessageDto, reservation::CreateReservationParams},
    service::reservation::ReservationService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct CreateReservationDto {
    pub vehicle_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// GET /api/reservations
/// List every reservation, administrators only.
pub async fn list_all(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let reservation_service =
        ReservationService::new(state.db.clone(), state.vehicle_locks.clone());
    let reservations = reservation_service.list_all().await?;

    Ok(Json(reservations))
}

/// POST /api/reservations
/// Book a vehicle for the authenticated user.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation_service =
        ReservationService::new(state.db.clone(), state.vehicle_locks.clone());
    let reservation = reservation_service
        .create(CreateReservationParams {
            vehicle_id: dto.vehicle_id,
            user_id: user.id,
            start_time: dto.start_time,
            end_time: dto.end_time,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /api/reservations/me
/// List the authenticated user's reservations.
pub async fn list_mine(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation_service =
        ReservationService::new(state.db.clone(), state.vehicle_locks.clone());
    let reservations = reservation_service.list_for_user(user.id).await?;

    Ok(Json(reservations))
}

/// GET /api/reservations/me/active
/// List the authenticated user's reservations currently in progress.
pub async fn list_mine_active(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation_service =
        ReservationService::new(state.db.clone(), state.vehicle_locks.clone());
    let reservations = reservation_service.list_active_for_user(user.id).await?;

    Ok(Json(reservations))
}

/// GET /api/reservations/{id}
/// Fetch one reservation, visible to its owner and administrators.
pub async fn get_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation_service =
        ReservationService::new(state.db.clone(), state.vehicle_locks.clone());
    let reservation = reservation_service.get_by_id(id, &user).await?;

    Ok(Json(reservation))
}

/// DELETE /api/reservations/{id}
/// Cancel a reservation before it starts. Owner or administrator only.
pub async fn cancel(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation_service =
        ReservationService::new(state.db.clone(), state.vehicle_locks.clone());
    reservation_service.cancel(id, &user).await?;

    Ok(Json(MessageDto {
        message: "Reservation cancelled".to_string(),
    }))
}
