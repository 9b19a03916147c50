use rust_decimal::Decimal;
use sqlx::PgPool;
use storage::{error::Result, models::Invoice, repository::invoice::InvoiceRepository};
use uuid::Uuid;

pub async fn create_invoice(pool: &PgPool, competitor_id: Uuid) -> Result<Invoice> {
    InvoiceRepository::new(pool)
        .create_for_competitor(competitor_id)
        .await
}

pub async fn find_invoice(pool: &PgPool, id: Uuid) -> Result<Invoice> {
    InvoiceRepository::new(pool).find_by_id(id).await
}

pub async fn confirm_payment(pool: &PgPool, id: Uuid, paid_amount: Decimal) -> Result<Invoice> {
    InvoiceRepository::new(pool)
        .confirm_payment(id, paid_amount)
        .await
}
