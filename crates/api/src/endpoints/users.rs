//! User endpoints.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use golos_common::AppResult;
use golos_core::{CreateUserInput, PatchUserInput, UpdateUserInput};
use golos_db::entities::user;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extractors::Json, response::no_content, state::AppState};

/// User response. The password hash is never serialized.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub nickname: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            nickname: user.nickname,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

/// User list response.
#[derive(Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

/// User list query parameters.
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Create a user.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUserInput>,
) -> AppResult<impl IntoResponse> {
    let user = state.user_service.create(input).await?;
    Ok((StatusCode::CREATED, axum::Json(UserResponse::from(user))))
}

/// List users.
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<axum::Json<UsersResponse>> {
    let users = state.user_service.list(query.limit, query.offset).await?;
    Ok(axum::Json(UsersResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

/// Get a user by ID.
async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<axum::Json<UserResponse>> {
    let user = state.user_service.get(id).await?;
    Ok(axum::Json(user.into()))
}

/// Replace a user's nickname and password.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateUserInput>,
) -> AppResult<axum::Json<UserResponse>> {
    let user = state.user_service.update(id, input).await?;
    Ok(axum::Json(user.into()))
}

/// Partially update a user.
async fn patch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<PatchUserInput>,
) -> AppResult<axum::Json<UserResponse>> {
    let user = state.user_service.patch(id, input).await?;
    Ok(axum::Json(user.into()))
}

/// Delete a user.
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    state.user_service.delete(id).await?;
    Ok(no_content())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route(
            "/{id}",
            get(show).put(update).patch(patch).delete(remove),
        )
}
