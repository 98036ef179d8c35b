use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Participant;

/// Request payload for registering a participant in a tournament.
///
/// The tournament id comes from the request path, never from the body, and
/// the referenced tournament is not verified to exist.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateParticipantRequest {
    pub name: Option<String>,
}

/// Request payload for updating a participant's score. An absent `score`
/// coerces to the default of 0.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParticipantRequest {
    #[serde(default)]
    pub score: f64,
}

/// Response containing a participant document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub score: f64,
    pub tournament_id: String,
}

impl From<Participant> for ParticipantResponse {
    fn from(p: Participant) -> Self {
        Self {
            id: p.id,
            name: p.name,
            score: p.score,
            tournament_id: p.tournament_id,
        }
    }
}
