use sqlx::PgPool;
use storage::{error::Result, models::User, repository::user::UserRepository};
use uuid::Uuid;

pub async fn get_user(pool: &PgPool, user_id: Uuid) -> Result<User> {
    UserRepository::new(pool).find_by_id(user_id).await
}

pub async fn create_user(
    pool: &PgPool,
    name: &str,
    gender: &str,
    province_id: Option<Uuid>,
    district_id: Option<Uuid>,
) -> Result<User> {
    UserRepository::new(pool)
        .create(name, gender, province_id, district_id)
        .await
}
