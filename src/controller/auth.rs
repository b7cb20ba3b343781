use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{
        api::MessageDto,
        user::{RegisterUserParams, Role, User},
    },
    service::user::UserService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/register
/// Create a new account and log it in. Self-registration always produces a
/// client account; administrator accounts are provisioned out of band.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(state.db.clone());

    let user = user_service
        .register(RegisterUserParams {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            role: Role::Client,
        })
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/auth/login
/// Verify credentials and establish a session.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(state.db.clone());

    let user = user_service.authenticate(&dto.email, &dto.password).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Json(User::from_entity(user)))
}

/// GET /api/auth/logout
/// Clear the session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Json(MessageDto {
        message: "Logged out".to_string(),
    }))
}

/// GET /api/auth/user
/// Return the currently authenticated user.
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);

    let Some(user_id) = auth_session.get_user_id().await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let user_service = UserService::new(state.db.clone());
    let Some(user) = user_service.get_by_id(user_id).await? else {
        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok(Json(user))
}
