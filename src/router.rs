use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{auth, category, reservation, vehicle},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/categories",
            get(category::list).post(category::create),
        )
        .route(
            "/api/categories/{id}",
            get(category::get_by_id)
                .put(category::update)
                .delete(category::delete),
        )
        .route("/api/vehicles", get(vehicle::list).post(vehicle::create))
        .route("/api/vehicles/available", get(vehicle::list_available))
        .route(
            "/api/vehicles/{id}",
            get(vehicle::get_by_id)
                .put(vehicle::update)
                .delete(vehicle::delete),
        )
        .route(
            "/api/vehicles/{id}/availability",
            get(vehicle::check_availability),
        )
        .route(
            "/api/reservations",
            get(reservation::list_all).post(reservation::create),
        )
        .route("/api/reservations/me", get(reservation::list_mine))
        .route(
            "/api/reservations/me/active",
            get(reservation::list_mine_active),
        )
        .route(
            "/api/reservations/{id}",
            get(reservation::get_by_id).delete(reservation::cancel),
        )
}
