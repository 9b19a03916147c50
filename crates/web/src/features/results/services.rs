use sqlx::PgPool;
use storage::{
    dto::result::SolveInput,
    error::Result,
    models::{Record, RoundResult},
    repository::result::ResultRepository,
    services::{
        record_detection::{self, RecordSelection},
        result_generation,
    },
};
use uuid::Uuid;

/// Seeds empty result rows for every verified competitor of the round.
pub async fn generate_results(pool: &PgPool, round_id: Uuid) -> Result<Vec<RoundResult>> {
    result_generation::generate_round_results(pool, round_id).await
}

pub async fn list_by_round(pool: &PgPool, round_id: Uuid) -> Result<Vec<RoundResult>> {
    ResultRepository::new(pool).list_by_round(round_id).await
}

pub async fn save_solves(
    pool: &PgPool,
    result_id: Uuid,
    inputs: &[Option<SolveInput>],
) -> Result<RoundResult> {
    ResultRepository::new(pool)
        .save_solves(result_id, inputs)
        .await
}

/// Runs record detection for the finished round.
pub async fn finish_round(
    pool: &PgPool,
    round_id: Uuid,
    selection: RecordSelection,
) -> Result<Vec<Record>> {
    record_detection::detect_round_records(pool, round_id, selection).await
}
