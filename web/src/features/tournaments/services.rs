use sqlx::PgPool;
use storage::{
    dto::tournament::{CreateTournamentRequest, UpdateTournamentRequest},
    error::Result,
    models::Tournament,
    repository::tournament::TournamentRepository,
};
use uuid::Uuid;

/// Create a new tournament
pub async fn create_tournament(pool: &PgPool, request: &CreateTournamentRequest) -> Result<Tournament> {
    let repo = TournamentRepository::new(pool);
    repo.create(request).await
}

/// Get tournament by id
pub async fn get_tournament(pool: &PgPool, id: Uuid) -> Result<Tournament> {
    let repo = TournamentRepository::new(pool);
    repo.find_by_id(id).await
}

/// Update a tournament
pub async fn update_tournament(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateTournamentRequest,
) -> Result<Tournament> {
    let repo = TournamentRepository::new(pool);
    repo.update(id, request).await
}

/// Delete a tournament
pub async fn delete_tournament(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = TournamentRepository::new(pool);
    repo.delete(id).await
}
