use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Invoice;

/// Payment-gateway callback body: the amount the gateway reports as paid.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentCallbackRequest {
    pub paid_amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvoiceResponse {
    pub invoice_id: Uuid,
    pub competitor_id: Uuid,
    pub amount: Decimal,
    pub is_paid: bool,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Invoice> for InvoiceResponse {
    fn from(i: Invoice) -> Self {
        Self {
            invoice_id: i.invoice_id,
            competitor_id: i.competitor_id,
            amount: i.amount,
            is_paid: i.is_paid,
            created_at: i.created_at,
        }
    }
}
