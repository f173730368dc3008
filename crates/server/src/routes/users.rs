use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::{dto::UserDto, errors::ApiError, state::AppState};

pub const SLOW_DONE: &str = "finished slow operation";
pub const USER_NOT_FOUND: &str = "User not found";

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = UserDto,
    responses(
        (status = 201, description = "Created", body = UserDto),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<UserDto>) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let created = state.users.create_user(input.name).await?;
    Ok((StatusCode::CREATED, Json(UserDto::from(created))))
}

#[utoipa::path(
    get, path = "/users", tag = "users",
    responses(
        (status = 200, description = "List OK", body = [UserDto]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.users.get_all_users().await?;
    info!(count = users.len(), "list users");
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    get, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "OK", body = UserDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response, ApiError> {
    match state.users.get_user(id).await? {
        Some(u) => Ok(Json(UserDto::from(u)).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Blocks a thread from the blocking pool for the configured delay; async
/// workers stay free for other requests meanwhile.
#[utoipa::path(
    get, path = "/users/slow", tag = "users",
    responses(
        (status = 200, description = "Finished", body = String),
        (status = 500, description = "Interrupted")
    )
)]
pub async fn slow(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    let delay = state.slow_delay;
    tokio::task::spawn_blocking(move || std::thread::sleep(delay))
        .await
        .map_err(|e| {
            warn!(error = %e, "slow operation did not complete");
            ApiError::Interrupted(e.to_string())
        })?;
    Ok(SLOW_DONE)
}

/// Responds with the stored record itself rather than the DTO projection.
#[utoipa::path(
    put, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UserDto,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::UserRecordDoc),
        (status = 404, description = "User not found", body = String),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<AppState>, Path(id): Path<i64>, Json(input): Json<UserDto>) -> Result<Response, ApiError> {
    match state.users.update_user(id, input.name).await? {
        Some(updated) => Ok(Json(updated).into_response()),
        None => Ok((StatusCode::NOT_FOUND, USER_NOT_FOUND).into_response()),
    }
}

#[utoipa::path(
    delete, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    if state.users.delete_user(id).await? {
        info!(id, "deleted user");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
