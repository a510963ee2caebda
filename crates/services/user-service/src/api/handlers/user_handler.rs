//! User handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;

use common::{AppError, AppResult};
use domain::{mapper, User, UserRequest, UserResponse};

use crate::api::extractors::ValidatedJson;
use crate::api::state::AppState;

/// Optional exact-match filters for the list endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Search query (`?searchParam=term`)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub search_param: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/search", get(search_users))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

fn stored_id(user: &User) -> AppResult<i64> {
    user.id
        .ok_or_else(|| AppError::internal("Stored user is missing its id"))
}

/// List all users, optionally filtered by exact first/last name
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state
        .user_service
        .find_users(params.first_name, params.last_name)
        .await?;

    Ok(Json(mapper::to_response_list(Some(users))))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Substring search over first and last names
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state
        .user_service
        .search_users(&params.search_param)
        .await?;
    Ok(Json(mapper::to_response_list(Some(users))))
}

/// Create user, responding with the new id
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<(StatusCode, Json<i64>)> {
    let user = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(stored_id(&user)?)))
}

/// Replace both names of a user, responding with its id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<Json<i64>> {
    let user = state.user_service.update_user(id, payload).await?;
    Ok(Json(stored_id(&user)?))
}

/// Delete user; missing users are not an error
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
