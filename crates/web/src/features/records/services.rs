use sqlx::PgPool;
use storage::{
    dto::record::CreateRecordRequest, error::Result, models::Record,
    repository::record::RecordRepository,
};
use uuid::Uuid;

pub async fn list_current(pool: &PgPool) -> Result<Vec<Record>> {
    RecordRepository::new(pool).list_current().await
}

pub async fn list_by_cube_type(pool: &PgPool, cube_type_id: Uuid) -> Result<Vec<Record>> {
    RecordRepository::new(pool)
        .list_by_cube_type(cube_type_id)
        .await
}

/// Seeds a tracked record combination; detection only ever replaces
/// existing values.
pub async fn create_record(pool: &PgPool, req: &CreateRecordRequest) -> Result<Record> {
    RecordRepository::new(pool).create(req).await
}
