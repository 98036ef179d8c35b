use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_tournament, delete_tournament, get_tournament, update_tournament};
use crate::features::participants;

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_tournament))
        .route(
            "/:id",
            get(get_tournament)
                .put(update_tournament)
                .delete(delete_tournament),
        )
        .nest("/:id/participants", participants::routes())
}
