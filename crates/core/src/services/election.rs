//! Election service.

use chrono::Utc;
use golos_common::{AppError, AppResult, IdGenerator};
use golos_db::{
    entities::election,
    repositories::{ElectionRepository, UserRepository},
};
use sea_orm::Set;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::pagination::{clamp_limit, clamp_offset};

/// Election service for business logic.
#[derive(Clone)]
pub struct ElectionService {
    election_repo: ElectionRepository,
    user_repo: UserRepository,
    id_gen: IdGenerator,
}

/// Input for creating a new election.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateElectionInput {
    pub user_id: Uuid,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(max = 512))]
    pub description: String,
}

/// Input for partially updating an election.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PatchElectionInput {
    pub user_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(max = 512))]
    pub description: Option<String>,
}

impl PatchElectionInput {
    /// Whether the patch carries no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.name.is_none() && self.description.is_none()
    }
}

impl ElectionService {
    /// Create a new election service.
    #[must_use]
    pub const fn new(election_repo: ElectionRepository, user_repo: UserRepository) -> Self {
        Self {
            election_repo,
            user_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Create a new election.
    ///
    /// A dangling owner surfaces as [`AppError::UserNotFound`] from the
    /// foreign key, without a pre-flight lookup.
    pub async fn create(&self, input: CreateElectionInput) -> AppResult<election::Model> {
        input.validate()?;

        let now = Utc::now();
        let model = election::ActiveModel {
            id: Set(self.id_gen.generate()),
            user_id: Set(input.user_id),
            name: Set(input.name),
            description: Set(input.description),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        self.election_repo.create(model).await
    }

    /// Get an election by ID.
    pub async fn get(&self, id: Uuid) -> AppResult<election::Model> {
        self.election_repo.get_by_id(id).await
    }

    /// Get elections (paginated, newest first).
    ///
    /// When `nickname` is supplied the page is scoped to that user's
    /// elections; an unknown nickname is [`AppError::UserNotFound`].
    pub async fn list(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
        nickname: Option<&str>,
    ) -> AppResult<Vec<election::Model>> {
        let owner = match nickname {
            Some(nickname) => Some(self.user_repo.get_by_nickname(nickname).await?.id),
            None => None,
        };

        self.election_repo
            .find_page(clamp_limit(limit), clamp_offset(offset), owner)
            .await
    }

    /// Partially update an election.
    pub async fn patch(&self, id: Uuid, input: PatchElectionInput) -> AppResult<election::Model> {
        input.validate()?;

        if input.is_empty() {
            return Err(AppError::NothingToChange);
        }

        let election = self.election_repo.get_by_id(id).await?;
        let mut active: election::ActiveModel = election.into();

        if let Some(user_id) = input.user_id {
            active.user_id = Set(user_id);
        }
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        active.updated_at = Set(Utc::now().into());

        self.election_repo.update(active).await
    }

    /// Delete an election by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.election_repo.delete_by_id(id).await
    }
}
