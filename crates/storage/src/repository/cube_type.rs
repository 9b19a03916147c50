use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::CubeType;

pub struct CubeTypeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CubeTypeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<CubeType>> {
        let cube_types = sqlx::query_as::<_, CubeType>(
            "SELECT cube_type_id, name, display_order FROM cube_types
             ORDER BY display_order, name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(cube_types)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<CubeType> {
        let cube_type = sqlx::query_as::<_, CubeType>(
            "SELECT cube_type_id, name, display_order FROM cube_types WHERE cube_type_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(cube_type)
    }

    pub async fn create(&self, name: &str, display_order: i32) -> Result<CubeType> {
        let cube_type = sqlx::query_as::<_, CubeType>(
            r#"
            INSERT INTO cube_types (name, display_order)
            VALUES ($1, $2)
            RETURNING cube_type_id, name, display_order
            "#,
        )
        .bind(name)
        .bind(display_order)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let e = StorageError::from(e);
            if e.is_unique_violation() {
                StorageError::ConstraintViolation("Cube type already exists".to_string())
            } else {
                e
            }
        })?;

        Ok(cube_type)
    }
}
