//! Vote service.

use chrono::Utc;
use golos_common::{AppError, AppResult, IdGenerator};
use golos_db::{
    entities::vote,
    repositories::{VoteRepository, VoteVariantRepository},
};
use sea_orm::Set;
use serde::Deserialize;
use uuid::Uuid;

use crate::pagination::{clamp_limit, clamp_offset};

/// Vote service for business logic.
#[derive(Clone)]
pub struct VoteService {
    vote_repo: VoteRepository,
    variant_repo: VoteVariantRepository,
    id_gen: IdGenerator,
}

/// Input for casting a vote.
#[derive(Debug, Deserialize)]
pub struct CreateVoteInput {
    pub user_id: Uuid,
    pub variant_id: Uuid,
}

/// Input for replacing a vote's mutable fields.
#[derive(Debug, Deserialize)]
pub struct UpdateVoteInput {
    pub user_id: Uuid,
    pub variant_id: Uuid,
}

/// Input for partially updating a vote.
#[derive(Debug, Default, Deserialize)]
pub struct PatchVoteInput {
    pub user_id: Option<Uuid>,
    pub variant_id: Option<Uuid>,
}

impl PatchVoteInput {
    /// Whether the patch carries no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.variant_id.is_none()
    }
}

impl VoteService {
    /// Create a new vote service.
    #[must_use]
    pub const fn new(vote_repo: VoteRepository, variant_repo: VoteVariantRepository) -> Self {
        Self {
            vote_repo,
            variant_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Cast a vote.
    ///
    /// The `(user_id, variant_id)` unique constraint rejects a second vote
    /// for the same variant; dangling parents surface as their not-found
    /// kinds. No pre-flight lookups.
    pub async fn create(&self, input: CreateVoteInput) -> AppResult<vote::Model> {
        let now = Utc::now();
        let model = vote::ActiveModel {
            id: Set(self.id_gen.generate()),
            user_id: Set(input.user_id),
            variant_id: Set(input.variant_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        self.vote_repo.create(model).await
    }

    /// Get a vote by ID.
    pub async fn get(&self, id: Uuid) -> AppResult<vote::Model> {
        self.vote_repo.get_by_id(id).await
    }

    /// Get one user's votes within one election (paginated, newest first).
    ///
    /// Votes carry no election reference, so this is two lookups: resolve
    /// the election's variant-id set, then page the user's votes restricted
    /// to that set. An election with no variants yields an empty page.
    pub async fn list_for_user_in_election(
        &self,
        user_id: Uuid,
        election_id: Uuid,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> AppResult<Vec<vote::Model>> {
        let variant_ids = self.variant_repo.find_ids_by_election(election_id).await?;
        if variant_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.vote_repo
            .find_user_page(
                user_id,
                &variant_ids,
                clamp_limit(limit),
                clamp_offset(offset),
            )
            .await
    }

    /// Replace a vote's user and variant.
    pub async fn update(&self, id: Uuid, input: UpdateVoteInput) -> AppResult<vote::Model> {
        let vote = self.vote_repo.get_by_id(id).await?;
        let mut active: vote::ActiveModel = vote.into();
        active.user_id = Set(input.user_id);
        active.variant_id = Set(input.variant_id);
        active.updated_at = Set(Utc::now().into());

        self.vote_repo.update(active).await
    }

    /// Partially update a vote.
    pub async fn patch(&self, id: Uuid, input: PatchVoteInput) -> AppResult<vote::Model> {
        if input.is_empty() {
            return Err(AppError::NothingToChange);
        }

        let vote = self.vote_repo.get_by_id(id).await?;
        let mut active: vote::ActiveModel = vote.into();

        if let Some(user_id) = input.user_id {
            active.user_id = Set(user_id);
        }
        if let Some(variant_id) = input.variant_id {
            active.variant_id = Set(variant_id);
        }
        active.updated_at = Set(Utc::now().into());

        self.vote_repo.update(active).await
    }

    /// Delete a vote by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.vote_repo.delete_by_id(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn create_test_vote(id: Uuid, user_id: Uuid, variant_id: Uuid) -> vote::Model {
        vote::Model {
            id,
            user_id,
            variant_id,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn create_test_service(
        vote_db: Arc<sea_orm::DatabaseConnection>,
        variant_db: Arc<sea_orm::DatabaseConnection>,
    ) -> VoteService {
        VoteService::new(
            VoteRepository::new(vote_db),
            VoteVariantRepository::new(variant_db),
        )
    }

    #[tokio::test]
    async fn test_create_vote() {
        let user_id = Uuid::new_v4();
        let variant_id = Uuid::new_v4();
        let stored = create_test_vote(Uuid::new_v4(), user_id, variant_id);

        let vote_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[stored.clone()]])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );
        let variant_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = create_test_service(vote_db, variant_db);
        let result = service
            .create(CreateVoteInput {
                user_id,
                variant_id,
            })
            .await
            .unwrap();

        assert_eq!(result.user_id, user_id);
        assert_eq!(result.variant_id, variant_id);
    }

    #[tokio::test]
    async fn test_list_for_user_in_election_filters_by_variant_set() {
        let user_id = Uuid::new_v4();
        let election_id = Uuid::new_v4();
        let variant_id = Uuid::new_v4();
        let stored = create_test_vote(Uuid::new_v4(), user_id, variant_id);

        let variant_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[
                    maplit::btreemap! { "id" => sea_orm::Value::from(variant_id) },
                ]])
                .into_connection(),
        );
        let vote_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[stored]])
                .into_connection(),
        );

        let service = create_test_service(vote_db, variant_db);
        let result = service
            .list_for_user_in_election(user_id, election_id, None, None)
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].variant_id, variant_id);
    }

    #[tokio::test]
    async fn test_list_for_user_in_election_without_variants_is_empty() {
        // The vote repository must not be queried when the variant set is
        // empty: its mock would fail on an unexpected query.
        let variant_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<
                    std::collections::BTreeMap<&str, sea_orm::Value>,
                >::new()])
                .into_connection(),
        );
        let vote_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = create_test_service(vote_db, variant_db);
        let result = service
            .list_for_user_in_election(Uuid::new_v4(), Uuid::new_v4(), None, None)
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_patch_with_no_fields_fails_before_storage() {
        let vote_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let variant_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = create_test_service(vote_db, variant_db);
        let result = service.patch(Uuid::new_v4(), PatchVoteInput::default()).await;

        assert_eq!(result, Err(AppError::NothingToChange));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let vote_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<vote::Model>::new()])
                .into_connection(),
        );
        let variant_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = create_test_service(vote_db, variant_db);
        let result = service.get(Uuid::new_v4()).await;

        assert_eq!(result, Err(AppError::VoteNotFound));
    }
}
