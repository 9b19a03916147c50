use sqlx::PgPool;
use storage::{
    error::Result,
    models::ScrambleGroup,
    repository::{competition::CompetitionRepository, scramble_group::ScrambleGroupRepository},
    services::scramble_generation::{self, MoveSequenceScrambler},
};
use uuid::Uuid;

/// Generates scramble groups for every (cube type, round) pair of the
/// competition. Appends on re-invocation.
pub async fn generate_scrambles(pool: &PgPool, slug: &str) -> Result<Vec<ScrambleGroup>> {
    let competition = CompetitionRepository::new(pool).find_by_slug(slug).await?;

    scramble_generation::generate_competition_scrambles(
        pool,
        competition.competition_id,
        &MoveSequenceScrambler,
    )
    .await
}

pub async fn list_by_round(pool: &PgPool, round_id: Uuid) -> Result<Vec<ScrambleGroup>> {
    ScrambleGroupRepository::new(pool)
        .list_by_round(round_id)
        .await
}
