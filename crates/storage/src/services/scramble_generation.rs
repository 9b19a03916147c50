use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{CubeType, Round, ScrambleGroup};

/// Extra groups generated per round beyond the nominal one, to cover group
/// reshuffles on competition day.
pub const GROUP_BUFFER_FACTOR: usize = 7;

/// Produces scrambles for a puzzle key. Unknown keys are an error the
/// caller propagates as-is.
pub trait Scrambler {
    fn scrambles(&self, puzzle: &str, count: usize) -> Result<Vec<String>>;
}

/// Random-move scramble generator. Sequences never repeat an axis on two
/// consecutive moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveSequenceScrambler;

fn move_set(puzzle: &str) -> Option<(&'static [&'static str], usize)> {
    match puzzle {
        "222" => Some((&["U", "R", "F"], 9)),
        "333" => Some((&["U", "D", "L", "R", "F", "B"], 20)),
        "444" => Some((&["U", "D", "L", "R", "F", "B", "Uw", "Rw", "Fw"], 40)),
        "555" => Some((
            &["U", "D", "L", "R", "F", "B", "Uw", "Dw", "Lw", "Rw", "Fw", "Bw"],
            60,
        )),
        "pyram" => Some((&["U", "L", "R", "B"], 11)),
        "skewb" => Some((&["U", "L", "R", "B"], 9)),
        _ => None,
    }
}

fn axis(mv: &str) -> u8 {
    match mv.as_bytes().first() {
        Some(b'U') | Some(b'D') => 0,
        Some(b'L') | Some(b'R') => 1,
        _ => 2,
    }
}

fn random_sequence<R: Rng>(rng: &mut R, moves: &[&str], length: usize) -> String {
    const MODIFIERS: [&str; 3] = ["", "'", "2"];

    let mut sequence = Vec::with_capacity(length);
    let mut last_axis = None;

    while sequence.len() < length {
        let mv = moves[rng.random_range(0..moves.len())];
        if last_axis == Some(axis(mv)) {
            continue;
        }
        last_axis = Some(axis(mv));
        let modifier = MODIFIERS[rng.random_range(0..MODIFIERS.len())];
        sequence.push(format!("{mv}{modifier}"));
    }

    sequence.join(" ")
}

impl Scrambler for MoveSequenceScrambler {
    fn scrambles(&self, puzzle: &str, count: usize) -> Result<Vec<String>> {
        let (moves, length) =
            move_set(puzzle).ok_or_else(|| StorageError::UnknownPuzzle(puzzle.to_string()))?;

        let mut rng = rand::rng();
        Ok((0..count)
            .map(|_| random_sequence(&mut rng, moves, length))
            .collect())
    }
}

/// Generates and persists scramble groups for every (cube type, round) pair
/// of a competition: `GROUP_BUFFER_FACTOR` groups of `per_group_count`
/// scrambles per round, numbered continuously across rounds of the same
/// cube type. Re-invocation appends further groups rather than replacing.
pub async fn generate_competition_scrambles<S: Scrambler>(
    pool: &PgPool,
    competition_id: Uuid,
    scrambler: &S,
) -> Result<Vec<ScrambleGroup>> {
    let mut tx = pool.begin().await?;

    let cube_types = sqlx::query_as::<_, CubeType>(
        r#"
        SELECT ct.cube_type_id, ct.name, ct.display_order
        FROM cube_types ct
        INNER JOIN competition_cube_types cct ON cct.cube_type_id = ct.cube_type_id
        WHERE cct.competition_id = $1
        ORDER BY ct.display_order, ct.name
        "#,
    )
    .bind(competition_id)
    .fetch_all(&mut *tx)
    .await?;

    let mut groups = Vec::new();

    for cube_type in &cube_types {
        let rounds = sqlx::query_as::<_, Round>(
            r#"
            SELECT round_id, competition_id, cube_type_id, name, per_group_count,
                   advance_count, is_duel, result_format, created_at
            FROM rounds
            WHERE competition_id = $1 AND cube_type_id = $2
            ORDER BY created_at, round_id
            "#,
        )
        .bind(competition_id)
        .bind(cube_type.cube_type_id)
        .fetch_all(&mut *tx)
        .await?;

        // Continue numbering after whatever this cube type already has.
        let existing: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM scramble_groups sg
            INNER JOIN rounds r ON r.round_id = sg.round_id
            WHERE r.competition_id = $1 AND r.cube_type_id = $2
            "#,
        )
        .bind(competition_id)
        .bind(cube_type.cube_type_id)
        .fetch_one(&mut *tx)
        .await?;

        let mut group_no = existing as usize + 1;

        for round in &rounds {
            let per_group = round.per_group_count.max(1) as usize;
            let scrambles = scrambler.scrambles(&cube_type.name, per_group * GROUP_BUFFER_FACTOR)?;

            for chunk in scrambles.chunks(per_group) {
                let group = sqlx::query_as::<_, ScrambleGroup>(
                    r#"
                    INSERT INTO scramble_groups (round_id, group_no, scrambles)
                    VALUES ($1, $2, $3)
                    RETURNING group_id, round_id, group_no, scrambles, created_at
                    "#,
                )
                .bind(round.round_id)
                .bind(group_no.to_string())
                .bind(chunk)
                .fetch_one(&mut *tx)
                .await?;

                groups.push(group);
                group_no += 1;
            }
        }
    }

    tx.commit().await?;

    tracing::info!(
        competition_id = %competition_id,
        groups = groups.len(),
        "scramble groups generated"
    );

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scramble_count_and_length() {
        let scrambles = MoveSequenceScrambler.scrambles("333", 5).unwrap();
        assert_eq!(scrambles.len(), 5);
        for scramble in &scrambles {
            assert_eq!(scramble.split_whitespace().count(), 20);
        }
    }

    #[test]
    fn test_no_consecutive_moves_on_the_same_axis() {
        let scrambles = MoveSequenceScrambler.scrambles("333", 20).unwrap();
        for scramble in &scrambles {
            let axes: Vec<u8> = scramble.split_whitespace().map(axis).collect();
            for pair in axes.windows(2) {
                assert_ne!(pair[0], pair[1], "axis repeat in {scramble}");
            }
        }
    }

    #[test]
    fn test_moves_come_from_the_puzzle_move_set() {
        let scrambles = MoveSequenceScrambler.scrambles("222", 3).unwrap();
        for scramble in &scrambles {
            for mv in scramble.split_whitespace() {
                let base = mv.trim_end_matches(['\'', '2']);
                assert!(["U", "R", "F"].contains(&base), "unexpected move {mv}");
            }
        }
    }

    #[test]
    fn test_unknown_puzzle_is_an_error() {
        let err = MoveSequenceScrambler.scrambles("megaminx", 1).unwrap_err();
        assert!(matches!(err, StorageError::UnknownPuzzle(name) if name == "megaminx"));
    }
}
