//! Vote variant service.

use chrono::Utc;
use golos_common::{AppResult, IdGenerator};
use golos_db::{entities::vote_variant, repositories::VoteVariantRepository};
use sea_orm::Set;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Vote variant service for business logic.
#[derive(Clone)]
pub struct VoteVariantService {
    variant_repo: VoteVariantRepository,
    id_gen: IdGenerator,
}

/// Input for creating a new vote variant.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVoteVariantInput {
    pub election_id: Uuid,

    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// Input for replacing a variant's name, its only mutable field.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVoteVariantInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

impl VoteVariantService {
    /// Create a new vote variant service.
    #[must_use]
    pub const fn new(variant_repo: VoteVariantRepository) -> Self {
        Self {
            variant_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Create a new vote variant.
    ///
    /// A dangling election surfaces as `ElectionNotFound` from the foreign
    /// key, without a pre-flight lookup.
    pub async fn create(&self, input: CreateVoteVariantInput) -> AppResult<vote_variant::Model> {
        input.validate()?;

        let now = Utc::now();
        let model = vote_variant::ActiveModel {
            id: Set(self.id_gen.generate()),
            election_id: Set(input.election_id),
            name: Set(input.name),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        self.variant_repo.create(model).await
    }

    /// Get a variant by ID.
    pub async fn get(&self, id: Uuid) -> AppResult<vote_variant::Model> {
        self.variant_repo.get_by_id(id).await
    }

    /// Get all variants of one election, newest first.
    pub async fn list_by_election(&self, election_id: Uuid) -> AppResult<Vec<vote_variant::Model>> {
        self.variant_repo.find_by_election(election_id).await
    }

    /// Replace a variant's name.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateVoteVariantInput,
    ) -> AppResult<vote_variant::Model> {
        input.validate()?;

        let variant = self.variant_repo.get_by_id(id).await?;
        let mut active: vote_variant::ActiveModel = variant.into();
        active.name = Set(input.name);
        active.updated_at = Set(Utc::now().into());

        self.variant_repo.update(active).await
    }

    /// Delete a variant by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.variant_repo.delete_by_id(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use golos_common::AppError;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn create_test_variant(id: Uuid, election_id: Uuid, name: &str) -> vote_variant::Model {
        vote_variant::Model {
            id,
            election_id,
            name: name.to_string(),
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn create_test_service(db: Arc<sea_orm::DatabaseConnection>) -> VoteVariantService {
        VoteVariantService::new(VoteVariantRepository::new(db))
    }

    #[tokio::test]
    async fn test_create_variant() {
        let election_id = Uuid::new_v4();
        let stored = create_test_variant(Uuid::new_v4(), election_id, "pizza");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[stored.clone()]])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let service = create_test_service(db);
        let result = service
            .create(CreateVoteVariantInput {
                election_id,
                name: "pizza".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.name, "pizza");
        assert_eq!(result.election_id, election_id);
    }

    #[tokio::test]
    async fn test_create_variant_rejects_empty_name() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = create_test_service(db);
        let result = service
            .create(CreateVoteVariantInput {
                election_id: Uuid::new_v4(),
                name: String::new(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_replaces_name() {
        let id = Uuid::new_v4();
        let stored = create_test_variant(id, Uuid::new_v4(), "pizza");
        let renamed = vote_variant::Model {
            name: "sushi".to_string(),
            ..stored.clone()
        };

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![stored], vec![renamed]])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let service = create_test_service(db);
        let result = service
            .update(
                id,
                UpdateVoteVariantInput {
                    name: "sushi".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(result.name, "sushi");
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<vote_variant::Model>::new()])
                .into_connection(),
        );

        let service = create_test_service(db);
        let result = service.get(Uuid::new_v4()).await;

        assert_eq!(result, Err(AppError::VoteVariantNotFound));
    }
}
