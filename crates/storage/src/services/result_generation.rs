use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Competitor, Round, RoundResult};

/// Groups are filled in registration order: the first `per_group_count`
/// competitors land in group "1", the next batch in "2", and so on.
pub fn group_label(index: usize, per_group_count: usize) -> String {
    (index / per_group_count.max(1) + 1).to_string()
}

/// Seeds one empty result row per verified competitor of the round's
/// competition, partitioned into groups of the round's configured size.
///
/// Not idempotent: a second invocation inserts a second batch of rows, so
/// callers must guard against double-dispatch. The whole seeding runs in one
/// transaction.
pub async fn generate_round_results(pool: &PgPool, round_id: Uuid) -> Result<Vec<RoundResult>> {
    let mut tx = pool.begin().await?;

    let round = sqlx::query_as::<_, Round>(
        r#"
        SELECT round_id, competition_id, cube_type_id, name, per_group_count,
               advance_count, is_duel, result_format, created_at
        FROM rounds
        WHERE round_id = $1
        "#,
    )
    .bind(round_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(StorageError::NotFound)?;

    let competitors = sqlx::query_as::<_, Competitor>(
        r#"
        SELECT competitor_id, competition_id, user_id, status, guest_count,
               verified_at, province_id, district_id, created_at
        FROM competitors
        WHERE competition_id = $1 AND status = 'verified'
        ORDER BY created_at, competitor_id
        "#,
    )
    .bind(round.competition_id)
    .fetch_all(&mut *tx)
    .await?;

    if competitors.is_empty() {
        return Err(StorageError::NoCompetitors);
    }

    let per_group = round.per_group_count.max(1) as usize;

    let mut builder = QueryBuilder::new(
        "INSERT INTO round_results (round_id, competitor_id, group_no, result_format) ",
    );
    builder.push_values(competitors.iter().enumerate(), |mut row, (i, competitor)| {
        row.push_bind(round.round_id)
            .push_bind(competitor.competitor_id)
            .push_bind(group_label(i, per_group))
            .push_bind(&round.result_format);
    });
    builder.push(
        r#"
        RETURNING result_id, round_id, competitor_id, solve1, solve2, solve3,
                  solve4, solve5, best, average, group_no, result_format, created_at
        "#,
    );

    let results = builder
        .build_query_as::<RoundResult>()
        .fetch_all(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(
        round_id = %round_id,
        rows = results.len(),
        "seeded empty result rows"
    );

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_labels_partition_in_fetch_order() {
        // 45 competitors, 20 per group: "1" (0-19), "2" (20-39), "3" (40-44).
        let labels: Vec<String> = (0..45).map(|i| group_label(i, 20)).collect();
        assert_eq!(labels[0], "1");
        assert_eq!(labels[19], "1");
        assert_eq!(labels[20], "2");
        assert_eq!(labels[39], "2");
        assert_eq!(labels[40], "3");
        assert_eq!(labels[44], "3");
    }

    #[test]
    fn test_group_label_guards_zero_sized_groups() {
        assert_eq!(group_label(0, 0), "1");
        assert_eq!(group_label(3, 0), "4");
    }
}
