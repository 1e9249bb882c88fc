//! User repository.

use std::sync::Arc;

use crate::entities::{User, user};
use golos_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, SqlErr,
};
use uuid::Uuid;

/// User repository for database operations.
#[derive(Clone)]
pub struct UserRepository {
    db: Arc<DatabaseConnection>,
}

impl UserRepository {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<user::Model>> {
        User::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a user by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<user::Model> {
        self.find_by_id(id).await?.ok_or(AppError::UserNotFound)
    }

    /// Find a user by nickname.
    pub async fn find_by_nickname(&self, nickname: &str) -> AppResult<Option<user::Model>> {
        User::find()
            .filter(user::Column::Nickname.eq(nickname))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a user by nickname, returning an error if not found.
    pub async fn get_by_nickname(&self, nickname: &str) -> AppResult<user::Model> {
        self.find_by_nickname(nickname)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    /// Create a new user.
    ///
    /// A nickname collision surfaces as [`AppError::UserAlreadyExists`].
    pub async fn create(&self, model: user::ActiveModel) -> AppResult<user::Model> {
        model.insert(self.db.as_ref()).await.map_err(map_write_err)
    }

    /// Update a user. The active model must carry the primary key.
    pub async fn update(&self, model: user::ActiveModel) -> AppResult<user::Model> {
        model.update(self.db.as_ref()).await.map_err(|err| {
            if matches!(err, DbErr::RecordNotUpdated) {
                AppError::UserNotFound
            } else {
                map_write_err(err)
            }
        })
    }

    /// Get users (paginated, newest first).
    pub async fn find_page(&self, limit: u64, offset: u64) -> AppResult<Vec<user::Model>> {
        User::find()
            .order_by_desc(user::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a user by ID.
    ///
    /// Zero rows affected means the user was already absent. Owned elections
    /// and votes go with the row via `ON DELETE CASCADE`.
    pub async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        let res = User::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        if res.rows_affected == 0 {
            return Err(AppError::UserNotFound);
        }
        Ok(())
    }
}

/// Map constraint violations on user writes to domain kinds.
fn map_write_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(sql_err) => classify_sql_err(sql_err),
        None => AppError::Database(err.to_string()),
    }
}

/// The unique nickname index is the only constraint a user write can trip.
fn classify_sql_err(err: SqlErr) -> AppError {
    match err {
        SqlErr::UniqueConstraintViolation(_) => AppError::UserAlreadyExists,
        other => AppError::Database(other.to_string()),
    }
}
