//! Vote endpoints.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use golos_common::AppResult;
use golos_core::{CreateVoteInput, PatchVoteInput, UpdateVoteInput};
use golos_db::entities::vote;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extractors::Json, response::no_content, state::AppState};

/// Vote response.
#[derive(Serialize)]
pub struct VoteResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub variant_id: Uuid,
    pub created_at: String,
    pub updated_at: String,
}

impl From<vote::Model> for VoteResponse {
    fn from(vote: vote::Model) -> Self {
        Self {
            id: vote.id,
            user_id: vote.user_id,
            variant_id: vote.variant_id,
            created_at: vote.created_at.to_rfc3339(),
            updated_at: vote.updated_at.to_rfc3339(),
        }
    }
}

/// Vote list response.
#[derive(Serialize)]
pub struct VotesResponse {
    pub votes: Vec<VoteResponse>,
}

/// Vote list query parameters: one user's votes within one election.
#[derive(Debug, Deserialize)]
pub struct ListVotesQuery {
    pub user_id: Uuid,
    pub election_id: Uuid,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Cast a vote.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVoteInput>,
) -> AppResult<impl IntoResponse> {
    let vote = state.vote_service.create(input).await?;
    Ok((StatusCode::CREATED, axum::Json(VoteResponse::from(vote))))
}

/// List one user's votes within one election.
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListVotesQuery>,
) -> AppResult<axum::Json<VotesResponse>> {
    let votes = state
        .vote_service
        .list_for_user_in_election(query.user_id, query.election_id, query.limit, query.offset)
        .await?;
    Ok(axum::Json(VotesResponse {
        votes: votes.into_iter().map(Into::into).collect(),
    }))
}

/// Get a vote by ID.
async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<axum::Json<VoteResponse>> {
    let vote = state.vote_service.get(id).await?;
    Ok(axum::Json(vote.into()))
}

/// Replace a vote's user and variant.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateVoteInput>,
) -> AppResult<axum::Json<VoteResponse>> {
    let vote = state.vote_service.update(id, input).await?;
    Ok(axum::Json(vote.into()))
}

/// Partially update a vote.
async fn patch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<PatchVoteInput>,
) -> AppResult<axum::Json<VoteResponse>> {
    let vote = state.vote_service.patch(id, input).await?;
    Ok(axum::Json(vote.into()))
}

/// Delete a vote.
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    state.vote_service.delete(id).await?;
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
