//! Election repository.

use std::sync::Arc;

use crate::entities::{Election, election};
use golos_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, SqlErr,
};
use uuid::Uuid;

/// Election repository for database operations.
#[derive(Clone)]
pub struct ElectionRepository {
    db: Arc<DatabaseConnection>,
}

impl ElectionRepository {
    /// Create a new election repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find an election by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<election::Model>> {
        Election::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find an election by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<election::Model> {
        self.find_by_id(id).await?.ok_or(AppError::ElectionNotFound)
    }

    /// Create a new election.
    ///
    /// A dangling `user_id` surfaces as [`AppError::UserNotFound`].
    pub async fn create(&self, model: election::ActiveModel) -> AppResult<election::Model> {
        model.insert(self.db.as_ref()).await.map_err(map_write_err)
    }

    /// Update an election. The active model must carry the primary key.
    pub async fn update(&self, model: election::ActiveModel) -> AppResult<election::Model> {
        model.update(self.db.as_ref()).await.map_err(|err| {
            if matches!(err, DbErr::RecordNotUpdated) {
                AppError::ElectionNotFound
            } else {
                map_write_err(err)
            }
        })
    }

    /// Get elections (paginated, newest first), optionally scoped to one owner.
    pub async fn find_page(
        &self,
        limit: u64,
        offset: u64,
        owner: Option<Uuid>,
    ) -> AppResult<Vec<election::Model>> {
        let mut query = Election::find();
        if let Some(user_id) = owner {
            query = query.filter(election::Column::UserId.eq(user_id));
        }

        query
            .order_by_desc(election::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete an election by ID.
    ///
    /// Its vote variants (and their votes) go with it via `ON DELETE CASCADE`.
    pub async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        let res = Election::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        if res.rows_affected == 0 {
            return Err(AppError::ElectionNotFound);
        }
        Ok(())
    }
}

/// Map constraint violations on election writes to domain kinds.
fn map_write_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(sql_err) => classify_sql_err(sql_err),
        None => AppError::Database(err.to_string()),
    }
}

/// The owner foreign key is the only constraint an election write can trip.
fn classify_sql_err(err: SqlErr) -> AppError {
    match err {
        SqlErr::ForeignKeyConstraintViolation(_) => AppError::UserNotFound,
        other => AppError::Database(other.to_string()),
    }
}
