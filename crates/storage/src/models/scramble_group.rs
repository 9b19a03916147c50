use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A numbered batch of scrambles for one round. Numbering continues across
/// rounds of the same cube type within a competition.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScrambleGroup {
    pub group_id: Uuid,
    pub round_id: Uuid,
    pub group_no: String,
    pub scrambles: Vec<String>,
    pub created_at: chrono::NaiveDateTime,
}
