use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Record;
use crate::services::solve_time;

/// Seeds a tracked record combination. A `null` value registers the
/// combination without a holder; detection only replaces set values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecordRequest {
    pub cube_type_id: Uuid,

    #[validate(custom(function = "validate_kind"))]
    pub kind: String,

    #[validate(custom(function = "validate_scope"))]
    pub scope: String,

    #[validate(custom(function = "validate_gender"))]
    #[serde(default = "default_gender")]
    pub gender: String,

    /// Required for province/district scopes.
    pub region_id: Option<Uuid>,

    pub value: Option<i64>,

    pub user_id: Option<Uuid>,

    pub result_id: Option<Uuid>,
}

fn default_gender() -> String {
    "all".to_string()
}

fn validate_kind(kind: &str) -> Result<(), validator::ValidationError> {
    if kind == "single" || kind == "average" {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_kind"))
    }
}

fn validate_scope(scope: &str) -> Result<(), validator::ValidationError> {
    if ["all", "province", "district"].contains(&scope) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_scope"))
    }
}

fn validate_gender(gender: &str) -> Result<(), validator::ValidationError> {
    if ["all", "male", "female"].contains(&gender) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_gender"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordResponse {
    pub record_id: Uuid,
    pub cube_type_id: Uuid,
    pub kind: String,
    pub scope: String,
    pub gender: String,
    pub region_id: Option<Uuid>,
    pub value: Option<i64>,
    pub display_value: String,
    pub user_id: Option<Uuid>,
    pub result_id: Option<Uuid>,
    pub round_id: Option<Uuid>,
    pub set_at: chrono::NaiveDateTime,
}

impl From<Record> for RecordResponse {
    fn from(r: Record) -> Self {
        Self {
            record_id: r.record_id,
            cube_type_id: r.cube_type_id,
            kind: r.kind,
            scope: r.scope,
            gender: r.gender,
            region_id: r.region_id,
            display_value: solve_time::format_ms(r.value),
            value: r.value,
            user_id: r.user_id,
            result_id: r.result_id,
            round_id: r.round_id,
            set_at: r.set_at,
        }
    }
}
