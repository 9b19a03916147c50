use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Competition {
    pub competition_id: Uuid,
    pub name: String,
    pub slug: String,
    pub status: String,
    pub base_fee: Decimal,
    pub cube_type_fee: Decimal,
    pub guest_fee: Decimal,
    pub created_at: chrono::NaiveDateTime,
}
