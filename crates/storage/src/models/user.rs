use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub user_id: Uuid,
    pub name: String,
    pub gender: String,
    pub province_id: Option<Uuid>,
    pub district_id: Option<Uuid>,
    pub created_at: chrono::NaiveDateTime,
}
