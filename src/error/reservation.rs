use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors produced by the reservation domain.
///
/// Every fallible booking operation reports its failure through one of these
/// variants so callers can distinguish bad input from genuine conflicts and
/// from infrastructure failures.
#[derive(Error, Debug)]
pub enum ReservationError {
    /// The request was malformed, e.g. an interval whose start is after its end.
    #[error("{0}")]
    Validation(String),

    /// A referenced vehicle, user, or reservation does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The requested interval overlaps an existing reservation for the vehicle.
    #[error("Vehicle is not available for the requested period")]
    Conflict,

    /// The caller is neither the reservation owner nor an administrator.
    #[error("Not allowed to access this reservation")]
    Forbidden,

    /// The reservation has already started and can no longer be cancelled.
    #[error("Reservation has already started and cannot be cancelled")]
    TooLate,

    /// The underlying store failed while checking or committing.
    #[error(transparent)]
    Storage(#[from] sea_orm::DbErr),
}

impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict => (
                StatusCode::CONFLICT,
                "Vehicle is not available for the requested period".to_string(),
            ),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "Not allowed to access this reservation".to_string(),
            ),
            Self::TooLate => (
                StatusCode::BAD_REQUEST,
                "Reservation has already started and cannot be cancelled".to_string(),
            ),
            Self::Storage(err) => {
                tracing::error!("Reservation storage failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
