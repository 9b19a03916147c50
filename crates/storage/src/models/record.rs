use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Current record holder for a (cube type, kind, scope, gender, region)
/// tuple. A NULL `value` means the combination is tracked but unset; the
/// detector skips those.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Record {
    pub record_id: Uuid,
    pub cube_type_id: Uuid,
    pub kind: String,
    pub scope: String,
    pub gender: String,
    pub region_id: Option<Uuid>,
    pub value: Option<i64>,
    pub user_id: Option<Uuid>,
    pub result_id: Option<Uuid>,
    pub round_id: Option<Uuid>,
    pub set_at: chrono::NaiveDateTime,
}
