use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Round;

/// Request payload for creating a round during competition setup
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRoundRequest {
    pub cube_type_id: Uuid,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(range(min = 1, message = "Group size must be at least 1"))]
    pub per_group_count: i32,

    #[validate(range(min = 1))]
    pub advance_count: Option<i32>,

    #[serde(default)]
    pub is_duel: bool,

    #[validate(custom(function = "validate_result_format"))]
    #[serde(default = "default_result_format")]
    pub result_format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoundResponse {
    pub round_id: Uuid,
    pub competition_id: Uuid,
    pub cube_type_id: Uuid,
    pub name: String,
    pub per_group_count: i32,
    pub advance_count: Option<i32>,
    pub is_duel: bool,
    pub result_format: String,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Round> for RoundResponse {
    fn from(r: Round) -> Self {
        Self {
            round_id: r.round_id,
            competition_id: r.competition_id,
            cube_type_id: r.cube_type_id,
            name: r.name,
            per_group_count: r.per_group_count,
            advance_count: r.advance_count,
            is_duel: r.is_duel,
            result_format: r.result_format,
            created_at: r.created_at,
        }
    }
}

fn default_result_format() -> String {
    "ao5".to_string()
}

fn validate_result_format(format: &str) -> Result<(), validator::ValidationError> {
    if format == "ao3" || format == "ao5" {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_result_format"))
    }
}
