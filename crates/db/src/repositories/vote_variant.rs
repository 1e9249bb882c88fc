//! Vote variant repository.

use std::sync::Arc;

use crate::entities::{VoteVariant, vote_variant};
use golos_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, SqlErr,
};
use uuid::Uuid;

/// Vote variant repository for database operations.
#[derive(Clone)]
pub struct VoteVariantRepository {
    db: Arc<DatabaseConnection>,
}

impl VoteVariantRepository {
    /// Create a new vote variant repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a variant by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<vote_variant::Model>> {
        VoteVariant::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a variant by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<vote_variant::Model> {
        self.find_by_id(id)
            .await?
            .ok_or(AppError::VoteVariantNotFound)
    }

    /// Create a new variant.
    ///
    /// A dangling `election_id` surfaces as [`AppError::ElectionNotFound`]; a
    /// duplicate name within one election as [`AppError::VoteVariantAlreadyExists`].
    pub async fn create(&self, model: vote_variant::ActiveModel) -> AppResult<vote_variant::Model> {
        model.insert(self.db.as_ref()).await.map_err(map_write_err)
    }

    /// Update a variant. The active model must carry the primary key.
    pub async fn update(&self, model: vote_variant::ActiveModel) -> AppResult<vote_variant::Model> {
        model.update(self.db.as_ref()).await.map_err(|err| {
            if matches!(err, DbErr::RecordNotUpdated) {
                AppError::VoteVariantNotFound
            } else {
                map_write_err(err)
            }
        })
    }

    /// Get all variants of one election, newest first.
    pub async fn find_by_election(&self, election_id: Uuid) -> AppResult<Vec<vote_variant::Model>> {
        VoteVariant::find()
            .filter(vote_variant::Column::ElectionId.eq(election_id))
            .order_by_desc(vote_variant::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get the IDs of all variants of one election.
    ///
    /// Used to scope vote listings to one election, since votes carry no
    /// election reference of their own.
    pub async fn find_ids_by_election(&self, election_id: Uuid) -> AppResult<Vec<Uuid>> {
        VoteVariant::find()
            .filter(vote_variant::Column::ElectionId.eq(election_id))
            .select_only()
            .column(vote_variant::Column::Id)
            .into_tuple::<Uuid>()
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a variant by ID.
    ///
    /// Votes referencing it go with the row via `ON DELETE CASCADE`.
    pub async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        let res = VoteVariant::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        if res.rows_affected == 0 {
            return Err(AppError::VoteVariantNotFound);
        }
        Ok(())
    }
}

/// Map constraint violations on variant writes to domain kinds.
fn map_write_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(sql_err) => classify_sql_err(sql_err),
        None => AppError::Database(err.to_string()),
    }
}

fn classify_sql_err(err: SqlErr) -> AppError {
    match err {
        SqlErr::UniqueConstraintViolation(_) => AppError::VoteVariantAlreadyExists,
        SqlErr::ForeignKeyConstraintViolation(_) => AppError::ElectionNotFound,
        other => AppError::Database(other.to_string()),
    }
}
