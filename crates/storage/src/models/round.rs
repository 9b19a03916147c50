use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Round {
    pub round_id: Uuid,
    pub competition_id: Uuid,
    pub cube_type_id: Uuid,
    pub name: String,
    /// Competitors per scramble group.
    pub per_group_count: i32,
    /// How many advance to the next round, if any.
    pub advance_count: Option<i32>,
    pub is_duel: bool,
    pub result_format: String,
    pub created_at: chrono::NaiveDateTime,
}
