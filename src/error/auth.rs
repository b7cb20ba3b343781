use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Authentication and authorization errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the current session.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session referenced a user id that no longer exists.
    #[error("User with id {0} not found in database")]
    UserNotInDatabase(i32),

    /// The authenticated user lacks the permission required by the route.
    #[error("User with id {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login failed because the email or password did not match.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not authenticated".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, required) => {
                tracing::warn!(
                    "User with id {} denied access, missing permission: {}",
                    user_id,
                    required
                );
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Access denied".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
