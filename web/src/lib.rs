pub mod config;
pub mod error;
pub mod features;

use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::tournaments::handlers::create_tournament,
        features::tournaments::handlers::get_tournament,
        features::tournaments::handlers::update_tournament,
        features::tournaments::handlers::delete_tournament,
        features::participants::handlers::create_participant,
        features::participants::handlers::list_participants,
        features::participants::handlers::update_participant,
        features::participants::handlers::delete_participant,
    ),
    components(
        schemas(
            storage::dto::tournament::CreateTournamentRequest,
            storage::dto::tournament::UpdateTournamentRequest,
            storage::dto::tournament::TournamentResponse,
            storage::dto::participant::CreateParticipantRequest,
            storage::dto::participant::UpdateParticipantRequest,
            storage::dto::participant::ParticipantResponse,
            storage::models::Tournament,
            storage::models::Participant,
        )
    ),
    tags(
        (name = "tournaments", description = "Tournament CRUD endpoints"),
        (name = "participants", description = "Participant endpoints, nested under a tournament"),
    )
)]
pub struct ApiDoc;

/// Assemble the application router around an injected database handle.
pub fn app(db: Database) -> Router {
    let api = Router::new()
        .nest("/tournaments", features::tournaments::routes())
        .with_state(db);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api)
        .layer(CorsLayer::permissive())
}
