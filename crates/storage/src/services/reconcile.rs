use std::collections::HashSet;
use std::hash::Hash;

/// Outcome of diffing a stored child-row set against a desired one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reconciliation<T> {
    pub to_delete: Vec<T>,
    pub to_insert: Vec<T>,
}

impl<T> Reconciliation<T> {
    pub fn is_noop(&self) -> bool {
        self.to_delete.is_empty() && self.to_insert.is_empty()
    }
}

/// Set difference for the bulk association endpoints: rows present but no
/// longer desired are deleted, desired but absent rows are inserted.
/// Outputs are sorted for deterministic statements.
pub fn reconcile<T>(current: &HashSet<T>, desired: &HashSet<T>) -> Reconciliation<T>
where
    T: Copy + Ord + Hash,
{
    let mut to_delete: Vec<T> = current.difference(desired).copied().collect();
    let mut to_insert: Vec<T> = desired.difference(current).copied().collect();
    to_delete.sort();
    to_insert.sort();

    Reconciliation {
        to_delete,
        to_insert,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[i32]) -> HashSet<i32> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_disjoint_sets_swap_everything() {
        let diff = reconcile(&set(&[1, 2]), &set(&[3, 4]));
        assert_eq!(diff.to_delete, vec![1, 2]);
        assert_eq!(diff.to_insert, vec![3, 4]);
    }

    #[test]
    fn test_equal_sets_are_a_noop() {
        let diff = reconcile(&set(&[1, 2, 3]), &set(&[3, 2, 1]));
        assert!(diff.is_noop());
    }

    #[test]
    fn test_partial_overlap() {
        let diff = reconcile(&set(&[1, 2, 3]), &set(&[2, 3, 4]));
        assert_eq!(diff.to_delete, vec![1]);
        assert_eq!(diff.to_insert, vec![4]);
    }

    #[test]
    fn test_empty_current_inserts_all() {
        let diff = reconcile(&set(&[]), &set(&[5, 6]));
        assert!(diff.to_delete.is_empty());
        assert_eq!(diff.to_insert, vec![5, 6]);
    }

    #[test]
    fn test_empty_desired_deletes_all() {
        let diff = reconcile(&set(&[5, 6]), &set(&[]));
        assert_eq!(diff.to_delete, vec![5, 6]);
        assert!(diff.to_insert.is_empty());
    }
}
