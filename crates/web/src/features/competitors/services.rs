use sqlx::PgPool;
use storage::{
    dto::competitor::RegisterCompetitorRequest,
    error::Result,
    models::Competitor,
    repository::{competition::CompetitionRepository, competitor::CompetitorRepository},
};
use uuid::Uuid;

pub async fn register(
    pool: &PgPool,
    slug: &str,
    req: &RegisterCompetitorRequest,
) -> Result<Competitor> {
    let competition = CompetitionRepository::new(pool).find_by_slug(slug).await?;

    CompetitorRepository::new(pool)
        .register(competition.competition_id, req)
        .await
}

pub async fn list_by_competition(pool: &PgPool, slug: &str) -> Result<Vec<Competitor>> {
    let competition = CompetitionRepository::new(pool).find_by_slug(slug).await?;

    CompetitorRepository::new(pool)
        .list_by_competition(competition.competition_id)
        .await
}

pub async fn verify(pool: &PgPool, competitor_id: Uuid) -> Result<Competitor> {
    CompetitorRepository::new(pool).verify(competitor_id).await
}

pub async fn cancel(pool: &PgPool, competitor_id: Uuid) -> Result<Competitor> {
    CompetitorRepository::new(pool).cancel(competitor_id).await
}

pub async fn set_cube_types(pool: &PgPool, competitor_id: Uuid, desired: &[Uuid]) -> Result<()> {
    let repo = CompetitorRepository::new(pool);
    repo.find_by_id(competitor_id).await?;
    repo.set_cube_types(competitor_id, desired).await
}

pub async fn list_cube_type_ids(pool: &PgPool, competitor_id: Uuid) -> Result<Vec<Uuid>> {
    CompetitorRepository::new(pool)
        .list_cube_type_ids(competitor_id)
        .await
}
