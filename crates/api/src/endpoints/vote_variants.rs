//! Vote variant endpoints.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use golos_common::AppResult;
use golos_core::{CreateVoteVariantInput, UpdateVoteVariantInput};
use golos_db::entities::vote_variant;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extractors::Json, response::no_content, state::AppState};

/// Vote variant response.
#[derive(Serialize)]
pub struct VoteVariantResponse {
    pub id: Uuid,
    pub election_id: Uuid,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<vote_variant::Model> for VoteVariantResponse {
    fn from(variant: vote_variant::Model) -> Self {
        Self {
            id: variant.id,
            election_id: variant.election_id,
            name: variant.name,
            created_at: variant.created_at.to_rfc3339(),
            updated_at: variant.updated_at.to_rfc3339(),
        }
    }
}

/// Vote variant list response.
#[derive(Serialize)]
pub struct VoteVariantsResponse {
    pub vote_variants: Vec<VoteVariantResponse>,
}

/// Vote variant list query parameters.
#[derive(Debug, Deserialize)]
pub struct ListVoteVariantsQuery {
    pub election_id: Uuid,
}

/// Create a vote variant.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVoteVariantInput>,
) -> AppResult<impl IntoResponse> {
    let variant = state.vote_variant_service.create(input).await?;
    Ok((
        StatusCode::CREATED,
        axum::Json(VoteVariantResponse::from(variant)),
    ))
}

/// List one election's vote variants.
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListVoteVariantsQuery>,
) -> AppResult<axum::Json<VoteVariantsResponse>> {
    let variants = state
        .vote_variant_service
        .list_by_election(query.election_id)
        .await?;
    Ok(axum::Json(VoteVariantsResponse {
        vote_variants: variants.into_iter().map(Into::into).collect(),
    }))
}

/// Get a vote variant by ID.
async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<axum::Json<VoteVariantResponse>> {
    let variant = state.vote_variant_service.get(id).await?;
    Ok(axum::Json(variant.into()))
}

/// Replace a vote variant's name.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateVoteVariantInput>,
) -> AppResult<axum::Json<VoteVariantResponse>> {
    let variant = state.vote_variant_service.update(id, input).await?;
    Ok(axum::Json(variant.into()))
}

/// Delete a vote variant.
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    state.vote_variant_service.delete(id).await?;
    Ok(no_content())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/{id}", get(show).put(update).delete(remove))
}
