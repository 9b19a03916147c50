use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Invoice {
    pub invoice_id: Uuid,
    pub competitor_id: Uuid,
    pub amount: Decimal,
    pub is_paid: bool,
    pub created_at: chrono::NaiveDateTime,
}
