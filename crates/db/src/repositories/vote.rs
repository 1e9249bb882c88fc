//! Vote repository.

use std::sync::Arc;

use crate::entities::{Vote, vote};
use golos_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, SqlErr,
};
use uuid::Uuid;

/// Vote repository for database operations.
#[derive(Clone)]
pub struct VoteRepository {
    db: Arc<DatabaseConnection>,
}

impl VoteRepository {
    /// Create a new vote repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a vote by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<vote::Model>> {
        Vote::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a vote by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<vote::Model> {
        self.find_by_id(id).await?.ok_or(AppError::VoteNotFound)
    }

    /// Create a new vote.
    ///
    /// A duplicate `(user_id, variant_id)` pair surfaces as
    /// [`AppError::VoteAlreadyExists`]; a dangling parent as that parent's
    /// not-found kind.
    pub async fn create(&self, model: vote::ActiveModel) -> AppResult<vote::Model> {
        model.insert(self.db.as_ref()).await.map_err(map_write_err)
    }

    /// Update a vote. The active model must carry the primary key.
    pub async fn update(&self, model: vote::ActiveModel) -> AppResult<vote::Model> {
        model.update(self.db.as_ref()).await.map_err(|err| {
            if matches!(err, DbErr::RecordNotUpdated) {
                AppError::VoteNotFound
            } else {
                map_write_err(err)
            }
        })
    }

    /// Get one user's votes (paginated, newest first), optionally restricted
    /// to a set of variant IDs.
    ///
    /// The variant set scopes the page to one election's variants; votes do
    /// not carry an election reference directly.
    pub async fn find_user_page(
        &self,
        user_id: Uuid,
        variant_ids: &[Uuid],
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<vote::Model>> {
        let mut query = Vote::find().filter(vote::Column::UserId.eq(user_id));
        if !variant_ids.is_empty() {
            query = query.filter(vote::Column::VariantId.is_in(variant_ids.iter().copied()));
        }

        query
            .order_by_desc(vote::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a vote by ID. Zero rows affected means the vote was absent.
    pub async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        let res = Vote::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        if res.rows_affected == 0 {
            return Err(AppError::VoteNotFound);
        }
        Ok(())
    }
}

/// Map constraint violations on vote writes to domain kinds.
fn map_write_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(sql_err) => classify_sql_err(sql_err),
        None => AppError::Database(err.to_string()),
    }
}

/// A vote write can trip three constraints: the `(user_id, variant_id)`
/// unique index and the two parent foreign keys. Foreign keys are named after
/// their column, which picks the parent kind.
fn classify_sql_err(err: SqlErr) -> AppError {
    match err {
        SqlErr::UniqueConstraintViolation(_) => AppError::VoteAlreadyExists,
        SqlErr::ForeignKeyConstraintViolation(constraint) if constraint.contains("user_id") => {
            AppError::UserNotFound
        }
        SqlErr::ForeignKeyConstraintViolation(_) => AppError::VoteVariantNotFound,
        other => AppError::Database(other.to_string()),
    }
}
