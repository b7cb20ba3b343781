use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::MessageDto,
        category::{CreateCategoryParams, UpdateCategoryParams},
    },
    service::category::CategoryService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct CreateCategoryDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateCategoryDto {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// GET /api/categories
/// List all categories, visible to any authenticated user.
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let category_service = CategoryService::new(state.db.clone());
    let categories = category_service.list().await?;

    Ok(Json(categories))
}

/// POST /api/categories
/// Create a category, administrators only.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let category_service = CategoryService::new(state.db.clone());
    let category = category_service
        .create(CreateCategoryParams {
            name: dto.name,
            description: dto.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let category_service = CategoryService::new(state.db.clone());
    let category = category_service.get_by_id(id).await?;

    Ok(Json(category))
}

/// PUT /api/categories/{id}
/// Update a category, administrators only.
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let category_service = CategoryService::new(state.db.clone());
    let category = category_service
        .update(
            id,
            UpdateCategoryParams {
                name: dto.name,
                description: dto.description,
            },
        )
        .await?;

    Ok(Json(category))
}

/// DELETE /api/categories/{id}
/// Delete a category, administrators only.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let category_service = CategoryService::new(state.db.clone());
    category_service.delete(id).await?;

    Ok(Json(MessageDto {
        message: "Category deleted".to_string(),
    }))
}
