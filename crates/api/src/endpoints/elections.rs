//! Election endpoints.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use golos_common::AppResult;
use golos_core::{CreateElectionInput, PatchElectionInput};
use golos_db::entities::election;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extractors::Json, response::no_content, state::AppState};

/// Election response.
#[derive(Serialize)]
pub struct ElectionResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<election::Model> for ElectionResponse {
    fn from(election: election::Model) -> Self {
        Self {
            id: election.id,
            user_id: election.user_id,
            name: election.name,
            description: election.description,
            created_at: election.created_at.to_rfc3339(),
            updated_at: election.updated_at.to_rfc3339(),
        }
    }
}

/// Election list response.
#[derive(Serialize)]
pub struct ElectionsResponse {
    pub elections: Vec<ElectionResponse>,
}

/// Election list query parameters.
///
/// When `nickname` is present, the page is scoped to that user's elections.
#[derive(Debug, Deserialize)]
pub struct ListElectionsQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub nickname: Option<String>,
}

/// Create an election.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateElectionInput>,
) -> AppResult<impl IntoResponse> {
    let election = state.election_service.create(input).await?;
    Ok((
        StatusCode::CREATED,
        axum::Json(ElectionResponse::from(election)),
    ))
}

/// List elections.
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListElectionsQuery>,
) -> AppResult<axum::Json<ElectionsResponse>> {
    let elections = state
        .election_service
        .list(query.limit, query.offset, query.nickname.as_deref())
        .await?;
    Ok(axum::Json(ElectionsResponse {
        elections: elections.into_iter().map(Into::into).collect(),
    }))
}

/// Get an election by ID.
async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<axum::Json<ElectionResponse>> {
    let election = state.election_service.get(id).await?;
    Ok(axum::Json(election.into()))
}

/// Partially update an election.
async fn patch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<PatchElectionInput>,
) -> AppResult<axum::Json<ElectionResponse>> {
    let election = state.election_service.patch(id, input).await?;
    Ok(axum::Json(election.into()))
}

/// Delete an election.
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    state.election_service.delete(id).await?;
    Ok(no_content())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/{id}", get(show).patch(patch).delete(remove))
}
