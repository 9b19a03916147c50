use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::record::CreateRecordRequest;
use crate::error::Result;
use crate::models::Record;

const RECORD_COLUMNS: &str = "record_id, cube_type_id, kind, scope, gender, region_id, \
                              value, user_id, result_id, round_id, set_at";

pub struct RecordRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RecordRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Current record per combination: the most recently set row for each
    /// (cube type, kind, scope, gender, region) tuple.
    pub async fn list_current(&self) -> Result<Vec<Record>> {
        let records = sqlx::query_as::<_, Record>(&format!(
            r#"
            SELECT DISTINCT ON (cube_type_id, kind, scope, gender, region_id)
                   {RECORD_COLUMNS}
            FROM records
            ORDER BY cube_type_id, kind, scope, gender, region_id, set_at DESC, record_id DESC
            "#
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    pub async fn list_by_cube_type(&self, cube_type_id: Uuid) -> Result<Vec<Record>> {
        let records = sqlx::query_as::<_, Record>(&format!(
            r#"
            SELECT DISTINCT ON (kind, scope, gender, region_id)
                   {RECORD_COLUMNS}
            FROM records
            WHERE cube_type_id = $1
            ORDER BY kind, scope, gender, region_id, set_at DESC, record_id DESC
            "#
        ))
        .bind(cube_type_id)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    /// Seeds a tracked combination, optionally with an initial value.
    /// Detection never bootstraps a first record, so unset combinations are
    /// created here.
    pub async fn create(&self, req: &CreateRecordRequest) -> Result<Record> {
        let record = sqlx::query_as::<_, Record>(&format!(
            r#"
            INSERT INTO records (cube_type_id, kind, scope, gender, region_id,
                                 value, user_id, result_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {RECORD_COLUMNS}
            "#
        ))
        .bind(req.cube_type_id)
        .bind(&req.kind)
        .bind(&req.scope)
        .bind(&req.gender)
        .bind(req.region_id)
        .bind(req.value)
        .bind(req.user_id)
        .bind(req.result_id)
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }
}
