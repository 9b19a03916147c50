use sqlx::PgPool;
use storage::{error::Result, models::CubeType, repository::cube_type::CubeTypeRepository};

pub async fn list_cube_types(pool: &PgPool) -> Result<Vec<CubeType>> {
    CubeTypeRepository::new(pool).list().await
}

pub async fn create_cube_type(pool: &PgPool, name: &str, display_order: i32) -> Result<CubeType> {
    CubeTypeRepository::new(pool)
        .create(name, display_order)
        .await
}
