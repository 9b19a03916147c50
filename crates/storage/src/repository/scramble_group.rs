use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::ScrambleGroup;

pub struct ScrambleGroupRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScrambleGroupRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_round(&self, round_id: Uuid) -> Result<Vec<ScrambleGroup>> {
        let groups = sqlx::query_as::<_, ScrambleGroup>(
            r#"
            SELECT group_id, round_id, group_no, scrambles, created_at
            FROM scramble_groups
            WHERE round_id = $1
            ORDER BY created_at, group_id
            "#,
        )
        .bind(round_id)
        .fetch_all(self.pool)
        .await?;

        Ok(groups)
    }
}
