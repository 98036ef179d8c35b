use sqlx::PgPool;

use crate::dto::participant::CreateParticipantRequest;
use crate::error::{Result, StorageError};
use crate::models::Participant;

/// Repository for participant database operations.
///
/// Participants are matched by the pair (name, tournament_id). Names are not
/// unique within a tournament; when duplicates exist, the LIMIT 1 subqueries
/// below resolve to a single arbitrary row.
pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new participant with the default score of 0. The referenced
    /// tournament is not checked for existence.
    pub async fn create(
        &self,
        tournament_id: &str,
        req: &CreateParticipantRequest,
    ) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (name, tournament_id)
            VALUES ($1, $2)
            RETURNING id, name, score, tournament_id
            "#,
        )
        .bind(&req.name)
        .bind(tournament_id)
        .fetch_one(self.pool)
        .await?;

        Ok(participant)
    }

    /// List every participant of a tournament. An unknown tournament id
    /// yields an empty list, not an error.
    pub async fn list_by_tournament(&self, tournament_id: &str) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, name, score, tournament_id
            FROM participants
            WHERE tournament_id = $1
            "#,
        )
        .bind(tournament_id)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// Overwrite the score of one participant matched by (name, tournament_id).
    pub async fn update_score(
        &self,
        tournament_id: &str,
        name: &str,
        score: f64,
    ) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            UPDATE participants
            SET score = $3
            WHERE id = (
                SELECT id FROM participants
                WHERE name = $1 AND tournament_id = $2
                LIMIT 1
            )
            RETURNING id, name, score, tournament_id
            "#,
        )
        .bind(name)
        .bind(tournament_id)
        .bind(score)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }

    /// Delete one participant matched by (name, tournament_id).
    pub async fn delete_by_name(&self, tournament_id: &str, name: &str) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM participants
            WHERE id = (
                SELECT id FROM participants
                WHERE name = $1 AND tournament_id = $2
                LIMIT 1
            )
            "#,
        )
        .bind(name)
        .bind(tournament_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
