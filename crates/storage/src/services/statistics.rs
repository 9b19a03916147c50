use crate::error::{Result, StorageError};
use crate::models::ResultFormat;
use crate::services::solve_time::DNF;

/// Minimum of the positive attempts, or `-1` when no valid attempt exists.
pub fn best(solves: &[i64]) -> i64 {
    solves
        .iter()
        .copied()
        .filter(|v| *v > 0)
        .min()
        .unwrap_or(DNF)
}

/// Maximum attempt. Any non-positive attempt makes the set incomplete and
/// yields the `-1` surrogate: a DNF counts as the worst attempt.
pub fn worst(solves: &[i64]) -> i64 {
    if solves.iter().any(|v| *v <= 0) {
        return DNF;
    }
    solves.iter().copied().max().unwrap_or(DNF)
}

/// Computes the average for the given format.
///
/// A wrong attempt count is a caller bug surfaced as
/// [`StorageError::SolveCountMismatch`]; an invalidated average (DNF
/// majority rules) is the in-band `-1` value. `best` and `average` carry no
/// ordering invariant between each other: an invalidated average can sit
/// next to a valid best.
pub fn average(solves: &[i64], format: ResultFormat) -> Result<i64> {
    let expected = format.solve_count();
    if solves.len() != expected {
        return Err(StorageError::SolveCountMismatch {
            expected,
            actual: solves.len(),
        });
    }

    match format {
        ResultFormat::Ao3 => Ok(mean_of_three(solves)),
        ResultFormat::Ao5 => Ok(trimmed_mean_of_five(solves)),
    }
}

/// One DNF invalidates an ao3.
fn mean_of_three(solves: &[i64]) -> i64 {
    if solves.iter().any(|v| *v <= 0) {
        return DNF;
    }
    solves.iter().sum::<i64>() / 3
}

/// Two or more DNFs invalidate an ao5. Otherwise one best and one worst
/// attempt are discarded (a lone DNF is the worst; lowest index wins ties)
/// and the remaining three are averaged.
fn trimmed_mean_of_five(solves: &[i64]) -> i64 {
    let dnf_count = solves.iter().filter(|v| **v <= 0).count();
    if dnf_count >= 2 {
        return DNF;
    }

    let best_value = best(solves);
    let best_idx = solves
        .iter()
        .position(|v| *v == best_value)
        .unwrap_or_default();

    let worst_idx = if dnf_count == 1 {
        solves.iter().position(|v| *v <= 0).unwrap_or_default()
    } else {
        let max = solves.iter().copied().max().unwrap_or(DNF);
        solves
            .iter()
            .enumerate()
            .find(|(i, v)| *i != best_idx && **v == max)
            .map(|(i, _)| i)
            .unwrap_or_default()
    };

    let remaining: Vec<i64> = solves
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != best_idx && *i != worst_idx)
        .map(|(_, v)| *v)
        .collect();

    mean_of_three(&remaining)
}

/// Derives the stored `(best, average)` pair from the five solve slots.
///
/// Only the first `format.solve_count()` slots are considered. `best` is
/// `None` until at least one attempt is entered; `average` is `None` until
/// every considered slot is entered, so a half-entered row never carries a
/// stale or premature average.
pub fn derive_stats(
    slots: &[Option<i64>],
    format: ResultFormat,
) -> Result<(Option<i64>, Option<i64>)> {
    let considered: Vec<i64> = slots
        .iter()
        .take(format.solve_count())
        .copied()
        .flatten()
        .collect();

    let best_value = if considered.is_empty() {
        None
    } else {
        Some(best(&considered))
    };

    let average_value = if considered.len() == format.solve_count() {
        Some(average(&considered, format)?)
    } else {
        None
    };

    Ok((best_value, average_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_picks_minimum_positive() {
        assert_eq!(best(&[12_340, 11_050, -1, 13_200, 12_900]), 11_050);
    }

    #[test]
    fn test_best_without_valid_attempts() {
        assert_eq!(best(&[]), -1);
        assert_eq!(best(&[-1, -1]), -1);
    }

    #[test]
    fn test_worst_with_dnf_is_surrogate() {
        assert_eq!(worst(&[10, 20, -1]), -1);
        assert_eq!(worst(&[10, 20, 30]), 30);
    }

    #[test]
    fn test_ao3_mean() {
        assert_eq!(average(&[10, 20, 30], ResultFormat::Ao3).unwrap(), 20);
    }

    #[test]
    fn test_ao3_one_dnf_invalidates() {
        assert_eq!(average(&[10, 20, -1], ResultFormat::Ao3).unwrap(), -1);
    }

    #[test]
    fn test_ao3_integer_mean_floors() {
        assert_eq!(average(&[10, 10, 11], ResultFormat::Ao3).unwrap(), 10);
    }

    #[test]
    fn test_solve_count_mismatch_is_an_error() {
        let err = average(&[10, 20], ResultFormat::Ao3).unwrap_err();
        assert!(matches!(
            err,
            StorageError::SolveCountMismatch {
                expected: 3,
                actual: 2
            }
        ));
        assert!(average(&[10, 20, 30], ResultFormat::Ao5).is_err());
    }

    #[test]
    fn test_ao5_single_dnf_is_discarded_as_worst() {
        // Best 11050 and the DNF are dropped; mean(12340, 13200, 12900).
        let solves = [12_340, 11_050, -1, 13_200, 12_900];
        assert_eq!(average(&solves, ResultFormat::Ao5).unwrap(), 12_813);
    }

    #[test]
    fn test_ao5_two_dnfs_invalidate() {
        assert_eq!(
            average(&[10_000, -1, 12_000, -1, 11_000], ResultFormat::Ao5).unwrap(),
            -1
        );
    }

    #[test]
    fn test_ao5_without_dnf_trims_extremes() {
        // Drops 9000 and 15000, keeps mean(10000, 11000, 12000).
        let solves = [10_000, 9_000, 15_000, 11_000, 12_000];
        assert_eq!(average(&solves, ResultFormat::Ao5).unwrap(), 11_000);
    }

    #[test]
    fn test_ao5_equal_attempts_discards_two_occurrences() {
        let solves = [10_000; 5];
        assert_eq!(average(&solves, ResultFormat::Ao5).unwrap(), 10_000);
    }

    #[test]
    fn test_derive_stats_partial_entry_has_no_average() {
        let slots = [Some(10_000), Some(11_000), None, None, None];
        let (best, average) = derive_stats(&slots, ResultFormat::Ao5).unwrap();
        assert_eq!(best, Some(10_000));
        assert_eq!(average, None);
    }

    #[test]
    fn test_derive_stats_empty_row() {
        let (best, average) = derive_stats(&[None; 5], ResultFormat::Ao5).unwrap();
        assert_eq!(best, None);
        assert_eq!(average, None);
    }

    #[test]
    fn test_derive_stats_full_ao3_ignores_trailing_slots() {
        let slots = [Some(10_000), Some(20_000), Some(30_000), None, None];
        let (best, average) = derive_stats(&slots, ResultFormat::Ao3).unwrap();
        assert_eq!(best, Some(10_000));
        assert_eq!(average, Some(20_000));
    }

    #[test]
    fn test_valid_best_beside_invalidated_average() {
        let solves = [10_000, -1, -1, 11_000, 12_000];
        assert_eq!(best(&solves), 10_000);
        assert_eq!(average(&solves, ResultFormat::Ao5).unwrap(), -1);
    }
}
