use rust_decimal::Decimal;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Competition, Competitor, Invoice};

const INVOICE_COLUMNS: &str = "invoice_id, competitor_id, amount, is_paid, created_at";

pub struct InvoiceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> InvoiceRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Invoice> {
        let invoice = sqlx::query_as::<_, Invoice>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE invoice_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(invoice)
    }

    /// Creates a payment intent for a competitor. The amount is the
    /// competition's base fee, plus the per-event fee for each selected
    /// cube type, plus the guest fee per guest. The selected cube types are
    /// linked to the invoice so the gateway callback knows what was bought.
    pub async fn create_for_competitor(&self, competitor_id: Uuid) -> Result<Invoice> {
        let mut tx = self.pool.begin().await?;

        let competitor = sqlx::query_as::<_, Competitor>(
            r#"
            SELECT competitor_id, competition_id, user_id, status, guest_count,
                   verified_at, province_id, district_id, created_at
            FROM competitors WHERE competitor_id = $1
            "#,
        )
        .bind(competitor_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        let competition = sqlx::query_as::<_, Competition>(
            r#"
            SELECT competition_id, name, slug, status, base_fee, cube_type_fee,
                   guest_fee, created_at
            FROM competitions WHERE competition_id = $1
            "#,
        )
        .bind(competitor.competition_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        let cube_type_ids: Vec<Uuid> = sqlx::query_scalar(
            "SELECT cube_type_id FROM competitor_cube_types
             WHERE competitor_id = $1 AND NOT is_paid",
        )
        .bind(competitor_id)
        .fetch_all(&mut *tx)
        .await?;

        let amount = competition.base_fee
            + competition.cube_type_fee * Decimal::from(cube_type_ids.len())
            + competition.guest_fee * Decimal::from(competitor.guest_count);

        let invoice = sqlx::query_as::<_, Invoice>(&format!(
            r#"
            INSERT INTO invoices (competitor_id, amount)
            VALUES ($1, $2)
            RETURNING {INVOICE_COLUMNS}
            "#
        ))
        .bind(competitor_id)
        .bind(amount)
        .fetch_one(&mut *tx)
        .await?;

        if !cube_type_ids.is_empty() {
            let mut builder =
                QueryBuilder::new("INSERT INTO invoice_cube_types (invoice_id, cube_type_id) ");
            builder.push_values(&cube_type_ids, |mut row, cube_type_id| {
                row.push_bind(invoice.invoice_id).push_bind(cube_type_id);
            });
            builder.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;
        Ok(invoice)
    }

    /// Gateway callback path: re-fetches the invoice, compares the reported
    /// amount, and on full payment marks the invoice paid, flips the
    /// purchased cube types to paid and verifies the competitor. One
    /// transaction; an already-paid invoice is returned unchanged.
    pub async fn confirm_payment(&self, id: Uuid, paid_amount: Decimal) -> Result<Invoice> {
        let mut tx = self.pool.begin().await?;

        let invoice = sqlx::query_as::<_, Invoice>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE invoice_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        if invoice.is_paid {
            return Ok(invoice);
        }

        if paid_amount < invoice.amount {
            return Err(StorageError::ConstraintViolation(format!(
                "Paid amount {paid_amount} does not cover invoice amount {}",
                invoice.amount
            )));
        }

        let invoice = sqlx::query_as::<_, Invoice>(&format!(
            "UPDATE invoices SET is_paid = TRUE WHERE invoice_id = $1 RETURNING {INVOICE_COLUMNS}"
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE competitor_cube_types
            SET is_paid = TRUE
            WHERE competitor_id = $1
              AND cube_type_id IN (SELECT cube_type_id FROM invoice_cube_types WHERE invoice_id = $2)
            "#,
        )
        .bind(invoice.competitor_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE competitors
            SET status = 'verified', verified_at = NOW()
            WHERE competitor_id = $1 AND status = 'created'
            "#,
        )
        .bind(invoice.competitor_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(invoice_id = %id, "invoice paid and competitor verified");

        Ok(invoice)
    }
}
