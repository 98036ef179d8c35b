use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::participant::{CreateParticipantRequest, ParticipantResponse, UpdateParticipantRequest},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/tournaments/{id}/participants",
    params(
        ("id" = String, Path, description = "Tournament id")
    ),
    request_body = CreateParticipantRequest,
    responses(
        (status = 201, description = "Participant created successfully", body = ParticipantResponse)
    ),
    tag = "participants"
)]
pub async fn create_participant(
    State(db): State<Database>,
    Path(tournament_id): Path<String>,
    Json(req): Json<CreateParticipantRequest>,
) -> Result<Response, WebError> {
    let participant = services::create_participant(db.pool(), &tournament_id, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ParticipantResponse::from(participant)),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/tournaments/{id}/participants",
    params(
        ("id" = String, Path, description = "Tournament id")
    ),
    responses(
        (status = 200, description = "Participants of the tournament, empty when none", body = Vec<ParticipantResponse>)
    ),
    tag = "participants"
)]
pub async fn list_participants(
    State(db): State<Database>,
    Path(tournament_id): Path<String>,
) -> Result<Json<Vec<ParticipantResponse>>, WebError> {
    let participants = services::list_participants(db.pool(), &tournament_id).await?;

    let response: Vec<ParticipantResponse> = participants
        .into_iter()
        .map(ParticipantResponse::from)
        .collect();

    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/tournaments/{id}/participants/{name}",
    params(
        ("id" = String, Path, description = "Tournament id"),
        ("name" = String, Path, description = "Participant name")
    ),
    request_body = UpdateParticipantRequest,
    responses(
        (status = 200, description = "Participant updated successfully", body = ParticipantResponse),
        (status = 404, description = "No participant with that name in the tournament")
    ),
    tag = "participants"
)]
pub async fn update_participant(
    State(db): State<Database>,
    Path((tournament_id, name)): Path<(String, String)>,
    Json(req): Json<UpdateParticipantRequest>,
) -> Result<Response, WebError> {
    let updated =
        services::update_participant(db.pool(), &tournament_id, &name, req.score).await?;

    Ok(Json(ParticipantResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/tournaments/{id}/participants/{name}",
    params(
        ("id" = String, Path, description = "Tournament id"),
        ("name" = String, Path, description = "Participant name")
    ),
    responses(
        (status = 204, description = "Participant deleted successfully"),
        (status = 404, description = "No participant with that name in the tournament")
    ),
    tag = "participants"
)]
pub async fn delete_participant(
    State(db): State<Database>,
    Path((tournament_id, name)): Path<(String, String)>,
) -> Result<Response, WebError> {
    services::delete_participant(db.pool(), &tournament_id, &name).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
