use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Record, Round};

/// Which qualifying result takes a beaten record.
///
/// The historical behavior is `FirstQualifier`: the first result in fetch
/// order that beats the old value wins, even when a later result in the
/// same batch is faster. `BestQualifier` scans the whole round and keeps
/// the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordSelection {
    #[default]
    FirstQualifier,
    BestQualifier,
}

/// A finished result joined with the competitor's region and the user's
/// gender, in round fetch order.
#[derive(Debug, Clone, FromRow)]
pub struct CandidateResult {
    pub result_id: Uuid,
    pub user_id: Uuid,
    pub best: Option<i64>,
    pub average: Option<i64>,
    pub province_id: Option<Uuid>,
    pub district_id: Option<Uuid>,
    pub gender: String,
}

/// A record row to insert for a beaten combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub cube_type_id: Uuid,
    pub kind: String,
    pub scope: String,
    pub gender: String,
    pub region_id: Option<Uuid>,
    pub value: i64,
    pub user_id: Uuid,
    pub result_id: Uuid,
}

fn kind_value(row: &CandidateResult, kind: &str) -> Option<i64> {
    match kind {
        "single" => row.best,
        "average" => row.average,
        _ => None,
    }
}

/// Scope and gender filters combine via AND. The gender filter applies
/// uniformly to every scope whenever the record's gender is not `all`.
fn matches_population(record: &Record, row: &CandidateResult) -> bool {
    let scope_ok = match record.scope.as_str() {
        "all" => true,
        "province" => record.region_id.is_some() && row.province_id == record.region_id,
        "district" => record.region_id.is_some() && row.district_id == record.region_id,
        _ => false,
    };

    let gender_ok = record.gender == "all" || row.gender == record.gender;

    scope_ok && gender_ok
}

/// Compares a round's results against the current record table and returns
/// the record rows to insert: at most one per combination, only strictly
/// smaller values, combinations with an unset value skipped (there is no
/// bootstrap path through detection).
pub fn detect_new_records(
    records: &[Record],
    rows: &[CandidateResult],
    selection: RecordSelection,
) -> Vec<NewRecord> {
    let mut new_records = Vec::new();

    for record in records {
        let Some(current) = record.value else {
            continue;
        };

        let mut chosen: Option<(&CandidateResult, i64)> = None;
        for row in rows {
            let Some(value) = kind_value(row, &record.kind) else {
                continue;
            };
            if value <= 0 || value >= current {
                continue;
            }
            if !matches_population(record, row) {
                continue;
            }

            match selection {
                RecordSelection::FirstQualifier => {
                    chosen = Some((row, value));
                    break;
                }
                RecordSelection::BestQualifier => {
                    if chosen.is_none_or(|(_, held)| value < held) {
                        chosen = Some((row, value));
                    }
                }
            }
        }

        if let Some((row, value)) = chosen {
            new_records.push(NewRecord {
                cube_type_id: record.cube_type_id,
                kind: record.kind.clone(),
                scope: record.scope.clone(),
                gender: record.gender.clone(),
                region_id: record.region_id,
                value,
                user_id: row.user_id,
                result_id: row.result_id,
            });
        }
    }

    new_records
}

/// Runs record detection for a finished round and persists the new record
/// rows, all in one transaction.
pub async fn detect_round_records(
    pool: &PgPool,
    round_id: Uuid,
    selection: RecordSelection,
) -> Result<Vec<Record>> {
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

    // Latest row per combination is the current record.
    let records = sqlx::query_as::<_, Record>(
        r#"
        SELECT record_id, cube_type_id, kind, scope, gender, region_id,
               value, user_id, result_id, round_id, set_at
        FROM (
            SELECT DISTINCT ON (kind, scope, gender, region_id)
                   record_id, cube_type_id, kind, scope, gender, region_id,
                   value, user_id, result_id, round_id, set_at
            FROM records
            WHERE cube_type_id = $1
            ORDER BY kind, scope, gender, region_id, set_at DESC, record_id DESC
        ) current
        WHERE current.value IS NOT NULL
        "#,
    )
    .bind(round.cube_type_id)
    .fetch_all(&mut *tx)
    .await?;

    let rows = sqlx::query_as::<_, CandidateResult>(
        r#"
        SELECT rr.result_id, c.user_id, rr.best, rr.average,
               c.province_id, c.district_id, u.gender
        FROM round_results rr
        INNER JOIN competitors c ON c.competitor_id = rr.competitor_id
        INNER JOIN users u ON u.user_id = c.user_id
        WHERE rr.round_id = $1
        ORDER BY rr.created_at, rr.result_id
        "#,
    )
    .bind(round_id)
    .fetch_all(&mut *tx)
    .await?;

    let mut inserted = Vec::new();
    for new_record in detect_new_records(&records, &rows, selection) {
        let record = sqlx::query_as::<_, Record>(
            r#"
            INSERT INTO records (cube_type_id, kind, scope, gender, region_id,
                                 value, user_id, result_id, round_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING record_id, cube_type_id, kind, scope, gender, region_id,
                      value, user_id, result_id, round_id, set_at
            "#,
        )
        .bind(new_record.cube_type_id)
        .bind(&new_record.kind)
        .bind(&new_record.scope)
        .bind(&new_record.gender)
        .bind(new_record.region_id)
        .bind(new_record.value)
        .bind(new_record.user_id)
        .bind(new_record.result_id)
        .bind(round.round_id)
        .fetch_one(&mut *tx)
        .await?;

        inserted.push(record);
    }

    tx.commit().await?;

    tracing::info!(
        round_id = %round_id,
        new_records = inserted.len(),
        "record detection finished"
    );

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: &str, scope: &str, gender: &str, region: Option<Uuid>, value: i64) -> Record {
        Record {
            record_id: Uuid::new_v4(),
            cube_type_id: Uuid::nil(),
            kind: kind.to_string(),
            scope: scope.to_string(),
            gender: gender.to_string(),
            region_id: region,
            value: Some(value),
            user_id: Some(Uuid::new_v4()),
            result_id: None,
            round_id: None,
            set_at: chrono::NaiveDateTime::default(),
        }
    }

    fn candidate(best: i64, average: i64, gender: &str) -> CandidateResult {
        CandidateResult {
            result_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            best: Some(best),
            average: Some(average),
            province_id: None,
            district_id: None,
            gender: gender.to_string(),
        }
    }

    #[test]
    fn test_district_single_beaten_once_per_batch() {
        let district = Uuid::new_v4();
        let records = [record("single", "district", "male", Some(district), 11_000)];

        let mut faster = candidate(10_500, 12_000, "male");
        faster.district_id = Some(district);
        let mut slower_qualifier = candidate(10_800, 12_500, "male");
        slower_qualifier.district_id = Some(district);

        let rows = [faster.clone(), slower_qualifier];
        let new_records = detect_new_records(&records, &rows, RecordSelection::FirstQualifier);

        assert_eq!(new_records.len(), 1);
        assert_eq!(new_records[0].value, 10_500);
        assert_eq!(new_records[0].result_id, faster.result_id);
    }

    #[test]
    fn test_first_qualifier_ignores_later_faster_result() {
        let records = [record("single", "all", "all", None, 11_000)];
        let first = candidate(10_800, 12_000, "male");
        let fastest = candidate(10_200, 12_000, "female");

        let rows = [first.clone(), fastest];
        let new_records = detect_new_records(&records, &rows, RecordSelection::FirstQualifier);

        assert_eq!(new_records.len(), 1);
        assert_eq!(new_records[0].value, 10_800);
        assert_eq!(new_records[0].result_id, first.result_id);
    }

    #[test]
    fn test_best_qualifier_keeps_the_minimum() {
        let records = [record("single", "all", "all", None, 11_000)];
        let first = candidate(10_800, 12_000, "male");
        let fastest = candidate(10_200, 12_000, "female");

        let rows = [first, fastest.clone()];
        let new_records = detect_new_records(&records, &rows, RecordSelection::BestQualifier);

        assert_eq!(new_records.len(), 1);
        assert_eq!(new_records[0].value, 10_200);
        assert_eq!(new_records[0].result_id, fastest.result_id);
    }

    #[test]
    fn test_tie_does_not_replace() {
        let records = [record("single", "all", "all", None, 11_000)];
        let rows = [candidate(11_000, 12_000, "male")];

        assert!(detect_new_records(&records, &rows, RecordSelection::FirstQualifier).is_empty());
    }

    #[test]
    fn test_unset_record_is_skipped() {
        let mut unset = record("single", "all", "all", None, 0);
        unset.value = None;
        let rows = [candidate(9_000, 10_000, "male")];

        assert!(detect_new_records(&[unset], &rows, RecordSelection::FirstQualifier).is_empty());
    }

    #[test]
    fn test_gender_filter_applies_to_every_scope() {
        let province = Uuid::new_v4();
        let records = [
            record("single", "all", "female", None, 11_000),
            record("single", "province", "female", Some(province), 11_000),
        ];

        let mut male = candidate(10_000, 12_000, "male");
        male.province_id = Some(province);

        let rows = [male];
        assert!(detect_new_records(&records, &rows, RecordSelection::FirstQualifier).is_empty());
    }

    #[test]
    fn test_wrong_region_does_not_qualify() {
        let records = [record("single", "province", "all", Some(Uuid::new_v4()), 11_000)];
        let mut row = candidate(10_000, 12_000, "male");
        row.province_id = Some(Uuid::new_v4());

        assert!(detect_new_records(&records, &[row], RecordSelection::FirstQualifier).is_empty());
    }

    #[test]
    fn test_average_kind_compares_average() {
        let records = [record("average", "all", "all", None, 12_000)];
        let rows = [candidate(10_000, 11_500, "male")];

        let new_records = detect_new_records(&records, &rows, RecordSelection::FirstQualifier);
        assert_eq!(new_records.len(), 1);
        assert_eq!(new_records[0].value, 11_500);
    }

    #[test]
    fn test_invalidated_average_never_qualifies() {
        let records = [record("average", "all", "all", None, 12_000)];
        let rows = [candidate(10_000, -1, "male")];

        assert!(detect_new_records(&records, &rows, RecordSelection::FirstQualifier).is_empty());
    }
}
