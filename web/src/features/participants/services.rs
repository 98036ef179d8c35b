use sqlx::PgPool;
use storage::{
    dto::participant::CreateParticipantRequest, error::Result, models::Participant,
    repository::participant::ParticipantRepository,
};

/// Register a participant in a tournament
pub async fn create_participant(
    pool: &PgPool,
    tournament_id: &str,
    request: &CreateParticipantRequest,
) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    repo.create(tournament_id, request).await
}

/// List all participants of a tournament
pub async fn list_participants(pool: &PgPool, tournament_id: &str) -> Result<Vec<Participant>> {
    let repo = ParticipantRepository::new(pool);
    repo.list_by_tournament(tournament_id).await
}

/// Update a participant's score, matched by (name, tournament id)
pub async fn update_participant(
    pool: &PgPool,
    tournament_id: &str,
    name: &str,
    score: f64,
) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    repo.update_score(tournament_id, name, score).await
}

/// Delete a participant, matched by (name, tournament id)
pub async fn delete_participant(pool: &PgPool, tournament_id: &str, name: &str) -> Result<()> {
    let repo = ParticipantRepository::new(pool);
    repo.delete_by_name(tournament_id, name).await
}
