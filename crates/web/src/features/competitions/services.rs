use sqlx::PgPool;
use storage::{
    dto::competition::{CreateCompetitionRequest, UpdateCompetitionRequest},
    error::Result,
    models::{Competition, CubeType},
    repository::competition::CompetitionRepository,
};
use uuid::Uuid;

pub async fn list_competitions(pool: &PgPool) -> Result<Vec<Competition>> {
    let repo = CompetitionRepository::new(pool);
    repo.list().await
}

pub async fn get_competition_by_slug(pool: &PgPool, slug: &str) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);
    repo.find_by_slug(slug).await
}

pub async fn create_competition(
    pool: &PgPool,
    request: &CreateCompetitionRequest,
) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);
    repo.create(request).await
}

pub async fn update_competition(
    pool: &PgPool,
    slug: &str,
    request: &UpdateCompetitionRequest,
) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);

    let existing = repo.find_by_slug(slug).await?;
    repo.update(existing.competition_id, &existing, request)
        .await
}

pub async fn delete_competition(pool: &PgPool, slug: &str) -> Result<()> {
    let repo = CompetitionRepository::new(pool);
    let competition = repo.find_by_slug(slug).await?;
    repo.delete(competition.competition_id).await
}

pub async fn list_cube_types(pool: &PgPool, slug: &str) -> Result<Vec<CubeType>> {
    let repo = CompetitionRepository::new(pool);
    let competition = repo.find_by_slug(slug).await?;
    repo.list_cube_types(competition.competition_id).await
}

/// Reconciles the competition's offered cube types against the desired set.
pub async fn set_cube_types(pool: &PgPool, slug: &str, desired: &[Uuid]) -> Result<()> {
    let repo = CompetitionRepository::new(pool);
    let competition = repo.find_by_slug(slug).await?;
    repo.set_cube_types(competition.competition_id, desired)
        .await
}
