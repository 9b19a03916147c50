use sqlx::PgPool;
use storage::{
    dto::round::CreateRoundRequest,
    error::Result,
    models::Round,
    repository::{competition::CompetitionRepository, round::RoundRepository},
};
use uuid::Uuid;

pub async fn create_round(pool: &PgPool, slug: &str, req: &CreateRoundRequest) -> Result<Round> {
    let competition = CompetitionRepository::new(pool).find_by_slug(slug).await?;

    RoundRepository::new(pool)
        .create(competition.competition_id, req)
        .await
}

pub async fn list_by_competition(pool: &PgPool, slug: &str) -> Result<Vec<Round>> {
    let competition = CompetitionRepository::new(pool).find_by_slug(slug).await?;

    RoundRepository::new(pool)
        .list_by_competition(competition.competition_id)
        .await
}

pub async fn get_round(pool: &PgPool, round_id: Uuid) -> Result<Round> {
    RoundRepository::new(pool).find_by_id(round_id).await
}

pub async fn delete_round(pool: &PgPool, round_id: Uuid) -> Result<()> {
    RoundRepository::new(pool).delete(round_id).await
}
