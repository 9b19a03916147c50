use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::User;

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, name, gender, province_id, district_id, created_at
             FROM users WHERE user_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    pub async fn create(
        &self,
        name: &str,
        gender: &str,
        province_id: Option<Uuid>,
        district_id: Option<Uuid>,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, gender, province_id, district_id)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id, name, gender, province_id, district_id, created_at
            "#,
        )
        .bind(name)
        .bind(gender)
        .bind(province_id)
        .bind(district_id)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }
}
