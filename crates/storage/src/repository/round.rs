use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::round::CreateRoundRequest;
use crate::error::{Result, StorageError};
use crate::models::Round;

const ROUND_COLUMNS: &str = "round_id, competition_id, cube_type_id, name, per_group_count, \
                             advance_count, is_duel, result_format, created_at";

pub struct RoundRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RoundRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, competition_id: Uuid, req: &CreateRoundRequest) -> Result<Round> {
        let round = sqlx::query_as::<_, Round>(&format!(
            r#"
            INSERT INTO rounds (competition_id, cube_type_id, name, per_group_count,
                                advance_count, is_duel, result_format)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ROUND_COLUMNS}
            "#
        ))
        .bind(competition_id)
        .bind(req.cube_type_id)
        .bind(&req.name)
        .bind(req.per_group_count)
        .bind(req.advance_count)
        .bind(req.is_duel)
        .bind(&req.result_format)
        .fetch_one(self.pool)
        .await?;

        Ok(round)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Round> {
        let round = sqlx::query_as::<_, Round>(&format!(
            "SELECT {ROUND_COLUMNS} FROM rounds WHERE round_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(round)
    }

    pub async fn list_by_competition(&self, competition_id: Uuid) -> Result<Vec<Round>> {
        let rounds = sqlx::query_as::<_, Round>(&format!(
            r#"
            SELECT {ROUND_COLUMNS} FROM rounds
            WHERE competition_id = $1
            ORDER BY created_at, round_id
            "#
        ))
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rounds)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM rounds WHERE round_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
