use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::tournament::{CreateTournamentRequest, UpdateTournamentRequest};
use crate::error::{Result, StorageError};
use crate::models::Tournament;

/// Repository for tournament database operations.
pub struct TournamentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new tournament. The id and the initial `"created"` status
    /// come from column defaults.
    pub async fn create(&self, req: &CreateTournamentRequest) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(
            r#"
            INSERT INTO tournaments (name, start_date, end_date)
            VALUES ($1, $2, $3)
            RETURNING id, name, start_date, end_date, status
            "#,
        )
        .bind(&req.name)
        .bind(req.start_date)
        .bind(req.end_date)
        .fetch_one(self.pool)
        .await?;

        Ok(tournament)
    }

    /// Get a tournament by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(
            r#"
            SELECT id, name, start_date, end_date, status
            FROM tournaments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(tournament)
    }

    /// Overwrite a tournament's mutable fields.
    ///
    /// Replacement semantics: a field absent from the request becomes NULL on
    /// the row. `status` is left as stored.
    pub async fn update(&self, id: Uuid, req: &UpdateTournamentRequest) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(
            r#"
            UPDATE tournaments
            SET name = $2, start_date = $3, end_date = $4
            WHERE id = $1
            RETURNING id, name, start_date, end_date, status
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(req.start_date)
        .bind(req.end_date)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(tournament)
    }

    /// Delete a tournament by id. Participants referencing it are left alone.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM tournaments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
