//! User service.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use golos_common::{AppError, AppResult, IdGenerator};
use golos_db::{entities::user, repositories::UserRepository};
use sea_orm::Set;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// User service for business logic.
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
    id_gen: IdGenerator,
}

/// Input for creating a new user.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserInput {
    #[validate(length(min = 3, max = 12), custom(function = alphanumeric))]
    pub nickname: String,

    #[validate(length(min = 5, max = 20))]
    pub password: String,
}

/// Input for replacing a user's mutable fields.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserInput {
    #[validate(length(min = 3, max = 12), custom(function = alphanumeric))]
    pub nickname: String,

    #[validate(length(min = 5, max = 20))]
    pub password: String,
}

/// Input for partially updating a user.
///
/// An absent field leaves the stored value unchanged; both columns are
/// non-nullable, so "clear this field" is not a representable state.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PatchUserInput {
    #[validate(length(min = 3, max = 12), custom(function = alphanumeric))]
    pub nickname: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub password: Option<String>,
}

impl PatchUserInput {
    /// Whether the patch carries no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nickname.is_none() && self.password.is_none()
    }
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub const fn new(user_repo: UserRepository) -> Self {
        Self {
            user_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Create a new user.
    ///
    /// Assigns the identifier and both timestamps, hashes the password and
    /// relies on the unique nickname constraint for collision detection.
    pub async fn create(&self, input: CreateUserInput) -> AppResult<user::Model> {
        input.validate()?;

        let password_hash = hash_password(&input.password)?;
        let now = Utc::now();

        let model = user::ActiveModel {
            id: Set(self.id_gen.generate()),
            nickname: Set(input.nickname),
            password: Set(password_hash),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        self.user_repo.create(model).await
    }

    /// Get a user by ID.
    pub async fn get(&self, id: Uuid) -> AppResult<user::Model> {
        self.user_repo.get_by_id(id).await
    }

    /// Get users (paginated, newest first).
    pub async fn list(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> AppResult<Vec<user::Model>> {
        self.user_repo
            .find_page(
                crate::pagination::clamp_limit(limit),
                crate::pagination::clamp_offset(offset),
            )
            .await
    }

    /// Replace a user's nickname and password.
    pub async fn update(&self, id: Uuid, input: UpdateUserInput) -> AppResult<user::Model> {
        input.validate()?;

        let password_hash = hash_password(&input.password)?;
        let user = self.user_repo.get_by_id(id).await?;

        let mut active: user::ActiveModel = user.into();
        active.nickname = Set(input.nickname);
        active.password = Set(password_hash);
        active.updated_at = Set(Utc::now().into());

        self.user_repo.update(active).await
    }

    /// Partially update a user.
    ///
    /// An all-absent patch fails with [`AppError::NothingToChange`] before
    /// touching storage.
    pub async fn patch(&self, id: Uuid, input: PatchUserInput) -> AppResult<user::Model> {
        input.validate()?;

        if input.is_empty() {
            return Err(AppError::NothingToChange);
        }

        let user = self.user_repo.get_by_id(id).await?;
        let mut active: user::ActiveModel = user.into();

        if let Some(nickname) = input.nickname {
            active.nickname = Set(nickname);
        }
        if let Some(password) = input.password {
            active.password = Set(hash_password(&password)?);
        }
        active.updated_at = Set(Utc::now().into());

        self.user_repo.update(active).await
    }

    /// Delete a user by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.user_repo.delete_by_id(id).await
    }
}

/// Hash a password using Argon2.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Hashing(e.to_string()))
}

/// Verify a password against a hash.
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| AppError::Hashing(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

fn alphanumeric(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(ValidationError::new("alphanumeric"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn create_test_user(id: Uuid, nickname: &str) -> user::Model {
        user::Model {
            id,
            nickname: nickname.to_string(),
            password: hash_password("secret123").unwrap(),
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn create_test_service(db: Arc<sea_orm::DatabaseConnection>) -> UserService {
        UserService::new(UserRepository::new(db))
    }

    // Unit tests for password functions

    #[test]
    fn test_hash_password() {
        let hash = hash_password("secret123").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hash.len() > 50);
    }

    #[test]
    fn test_verify_password_correct() {
        let hash = hash_password("secret123").unwrap();

        assert!(verify_password("secret123", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_incorrect() {
        let hash = hash_password("secret123").unwrap();

        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_invalid_hash() {
        let result = verify_password("secret123", "not-a-phc-string");
        assert!(result.is_err());
    }

    #[test]
    fn test_hash_password_salted() {
        let hash1 = hash_password("same_password").unwrap();
        let hash2 = hash_password("same_password").unwrap();

        // Different salts should produce different hashes
        assert_ne!(hash1, hash2);

        // But both should verify correctly
        assert!(verify_password("same_password", &hash1).unwrap());
        assert!(verify_password("same_password", &hash2).unwrap());
    }

    // Input validation tests

    #[test]
    fn test_create_user_input_validation() {
        // Nickname too short
        let input = CreateUserInput {
            nickname: "al".to_string(),
            password: "secret123".to_string(),
        };
        assert!(input.validate().is_err());

        // Nickname too long
        let input = CreateUserInput {
            nickname: "a".repeat(13),
            password: "secret123".to_string(),
        };
        assert!(input.validate().is_err());

        // Nickname not alphanumeric
        let input = CreateUserInput {
            nickname: "al_ice!".to_string(),
            password: "secret123".to_string(),
        };
        assert!(input.validate().is_err());

        // Password too short
        let input = CreateUserInput {
            nickname: "alice".to_string(),
            password: "1234".to_string(),
        };
        assert!(input.validate().is_err());

        // Valid input
        let input = CreateUserInput {
            nickname: "alice".to_string(),
            password: "secret123".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_patch_user_input_validation_applies_to_present_fields() {
        let input = PatchUserInput {
            nickname: Some("no spaces".to_string()),
            password: None,
        };
        assert!(input.validate().is_err());

        let input = PatchUserInput {
            nickname: Some("alice2".to_string()),
            password: None,
        };
        assert!(input.validate().is_ok());
    }

    // Service tests

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let stored = create_test_user(Uuid::new_v4(), "alice");

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
            .create(CreateUserInput {
                nickname: "alice".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.nickname, "alice");
        assert!(result.password.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<user::Model>::new()])
                .into_connection(),
        );

        let service = create_test_service(db);

        let result = service.get(Uuid::new_v4()).await;
        assert_eq!(result, Err(AppError::UserNotFound));
    }

    #[tokio::test]
    async fn test_patch_with_no_fields_fails_before_storage() {
        // No query results appended: the guard must fire before any query
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = create_test_service(db);

        let result = service
            .patch(Uuid::new_v4(), PatchUserInput::default())
            .await;
        assert_eq!(result, Err(AppError::NothingToChange));
    }

    #[tokio::test]
    async fn test_patch_nickname_only() {
        let id = Uuid::new_v4();
        let stored = create_test_user(id, "alice");
        let renamed = user::Model {
            nickname: "bob".to_string(),
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
            .patch(
                id,
                PatchUserInput {
                    nickname: Some("bob".to_string()),
                    password: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(result.nickname, "bob");
    }
}
