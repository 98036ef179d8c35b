use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Tournament;

/// Request payload for creating a new tournament.
///
/// Every field is optional: an absent field is stored as absent, not
/// rejected. `status` is not accepted from the client; it always starts as
/// `"created"`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentRequest {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Request payload for updating a tournament.
///
/// Replacement semantics: the three fields below are overwritten with the
/// request values as-is, so a field omitted from the body becomes absent on
/// the stored row. `status` is never touched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTournamentRequest {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Response containing a tournament document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub status: String,
}

impl From<Tournament> for TournamentResponse {
    fn from(t: Tournament) -> Self {
        Self {
            id: t.id,
            name: t.name,
            start_date: t.start_date,
            end_date: t.end_date,
            status: t.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn create_request_tolerates_missing_fields() {
        let req: CreateTournamentRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());
        assert!(req.start_date.is_none());
        assert!(req.end_date.is_none());
    }

    #[test]
    fn create_request_uses_camel_case_keys() {
        let req: CreateTournamentRequest = serde_json::from_str(
            r#"{"name":"Cup","startDate":"2024-01-01","endDate":"2024-01-02"}"#,
        )
        .unwrap();
        assert_eq!(req.name.as_deref(), Some("Cup"));
        assert_eq!(req.start_date.unwrap().to_string(), "2024-01-01");
        assert_eq!(req.end_date.unwrap().to_string(), "2024-01-02");
    }

    #[test]
    fn response_omits_absent_fields() {
        let resp = TournamentResponse {
            id: Uuid::nil(),
            name: Some("Cup".to_string()),
            start_date: None,
            end_date: None,
            status: "created".to_string(),
        };

        let value = serde_json::to_value(&resp).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("name"));
        assert!(obj.contains_key("status"));
        assert!(!obj.contains_key("startDate"));
        assert!(!obj.contains_key("endDate"));
    }

    #[test]
    fn malformed_date_is_a_decode_error() {
        let result: Result<CreateTournamentRequest, _> =
            serde_json::from_str(r#"{"startDate":"not-a-date"}"#);
        assert!(result.is_err());
    }
}
