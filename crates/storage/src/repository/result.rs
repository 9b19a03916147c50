use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::result::SolveInput;
use crate::error::{Result, StorageError};
use crate::models::{ResultFormat, RoundResult};
use crate::services::statistics;

const RESULT_COLUMNS: &str = "result_id, round_id, competitor_id, solve1, solve2, solve3, \
                              solve4, solve5, best, average, group_no, result_format, created_at";

pub struct ResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<RoundResult> {
        let result = sqlx::query_as::<_, RoundResult>(&format!(
            "SELECT {RESULT_COLUMNS} FROM round_results WHERE result_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(result)
    }

    /// Result rows of a round in seeding order.
    pub async fn list_by_round(&self, round_id: Uuid) -> Result<Vec<RoundResult>> {
        let results = sqlx::query_as::<_, RoundResult>(&format!(
            r#"
            SELECT {RESULT_COLUMNS} FROM round_results
            WHERE round_id = $1
            ORDER BY created_at, result_id
            "#
        ))
        .bind(round_id)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    /// Applies entered solves to a result row and recomputes `best` and
    /// `average` in the same transaction, so the derived columns never
    /// reflect stale solves.
    ///
    /// Per slot: `None` leaves the stored value alone, a malformed display
    /// string is rejected without changing the stored value.
    pub async fn save_solves(
        &self,
        result_id: Uuid,
        inputs: &[Option<SolveInput>],
    ) -> Result<RoundResult> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, RoundResult>(&format!(
            "SELECT {RESULT_COLUMNS} FROM round_results WHERE result_id = $1"
        ))
        .bind(result_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        let mut slots = [
            existing.solve1,
            existing.solve2,
            existing.solve3,
            existing.solve4,
            existing.solve5,
        ];
        for (slot, input) in slots.iter_mut().zip(inputs.iter()) {
            if let Some(input) = input
                && let Some(ms) = input.to_millis()
            {
                *slot = Some(ms);
            }
        }

        let format: ResultFormat = existing.result_format.parse()?;
        let (best, average) = statistics::derive_stats(&slots, format)?;

        let updated = sqlx::query_as::<_, RoundResult>(&format!(
            r#"
            UPDATE round_results
            SET solve1 = $2, solve2 = $3, solve3 = $4, solve4 = $5, solve5 = $6,
                best = $7, average = $8
            WHERE result_id = $1
            RETURNING {RESULT_COLUMNS}
            "#
        ))
        .bind(result_id)
        .bind(slots[0])
        .bind(slots[1])
        .bind(slots[2])
        .bind(slots[3])
        .bind(slots[4])
        .bind(best)
        .bind(average)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(updated)
    }
}
