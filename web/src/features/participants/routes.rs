use axum::{
    Router,
    routing::{post, put},
};
use storage::Database;

use super::handlers::{
    create_participant, delete_participant, list_participants, update_participant,
};

/// Routes nested under `/tournaments/:id/participants`; the tournament id
/// path parameter is captured by the parent router.
pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_participant).get(list_participants))
        .route("/:name", put(update_participant).delete(delete_participant))
}
