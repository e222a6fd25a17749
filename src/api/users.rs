use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::payload::{JsonOrForm, UserPayload};
use crate::api::server::AppState;
use crate::service::users::ServiceError;

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonOrForm(payload): JsonOrForm<UserPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .users
        .create_user(payload.name(), payload.bio())
        .await
        .map_err(|err| match err {
            ServiceError::Validation => ApiError::MissingFields,
            ServiceError::NotFound => ApiError::NotFound,
            ServiceError::Persistence(e) => ApiError::WriteRejected(e),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": user })),
    ))
}

pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let users = state
        .users
        .list_users()
        .await
        .map_err(|_| ApiError::Internal("The users information could not be retrieved."))?;

    Ok(Json(json!({
        "success": true,
        "count": users.len(),
        "data": users,
    })))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.users.get_user(&id).await.map_err(|err| match err {
        ServiceError::NotFound => ApiError::NotFound,
        _ => ApiError::Internal("The user information could not be retrieved."),
    })?;

    Ok(Json(json!({ "success": true, "data": user })))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.users.delete_user(&id).await.map_err(|err| match err {
        ServiceError::NotFound => ApiError::NotFoundMessage,
        _ => ApiError::Internal("The user could not be removed"),
    })?;

    Ok(Json(json!({
        "success": true,
        "message": format!("{} was successfully deleted", user.name),
    })))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonOrForm(payload): JsonOrForm<UserPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .users
        .update_user(&id, payload.name(), payload.bio())
        .await
        .map_err(|err| match err {
            ServiceError::NotFound => ApiError::NotFoundMessage,
            ServiceError::Validation => ApiError::MissingFields,
            ServiceError::Persistence(_) => {
                ApiError::Internal("The user information could not be modified.")
            }
        })?;

    Ok(Json(json!({
        "success": true,
        "message": format!("{} was successfully updated", user.name),
        "data": user,
    })))
}
