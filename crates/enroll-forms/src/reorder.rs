//! Reorder protocol: splice-and-reindex.
//!
//! A reposition gesture over the current ordered id list becomes a full
//! reassignment of dense `1..=N` order values. Every item gets a value,
//! not only the moved one, so the collection is gap-free after every
//! reorder. Persistence happens in a single repository batch
//! ([`crate::repository::FieldRepository::set_orders`]), so a crash
//! cannot leave a half-applied sequence.

use crate::model::DefinitionId;

/// Move the id at `from` to `to` and return the `(id, order)` assignment
/// for the whole list. `None` when either index is out of range.
pub fn splice_reorder(
    mut ids: Vec<DefinitionId>,
    from: usize,
    to: usize,
) -> Option<Vec<(DefinitionId, i32)>> {
    if from >= ids.len() || to >= ids.len() {
        return None;
    }
    let moved = ids.remove(from);
    ids.insert(to, moved);
    Some(dense_orders(&ids))
}

/// Dense `1..=N` order values following the given id sequence.
pub fn dense_orders(ids: &[DefinitionId]) -> Vec<(DefinitionId, i32)> {
    ids.iter()
        .enumerate()
        .map(|(position, &id)| (id, position as i32 + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_forward_and_back_restores_orders() {
        let ids = vec![10, 20, 30, 40];

        let moved = splice_reorder(ids.clone(), 1, 3).unwrap();
        assert_eq!(moved, [(10, 1), (30, 2), (40, 3), (20, 4)]);

        // Undo: the moved id is now at index 3; put it back at 1.
        let sequence: Vec<_> = moved.iter().map(|&(id, _)| id).collect();
        let restored = splice_reorder(sequence, 3, 1).unwrap();
        assert_eq!(restored, dense_orders(&ids));
    }

    #[test]
    fn orders_are_dense_from_one() {
        let assigned = splice_reorder(vec![7, 3, 9], 2, 0).unwrap();
        let orders: Vec<_> = assigned.iter().map(|&(_, o)| o).collect();
        assert_eq!(orders, [1, 2, 3]);
        assert_eq!(assigned[0].0, 9);
    }

    #[test]
    fn same_index_is_identity() {
        let assigned = splice_reorder(vec![1, 2, 3], 1, 1).unwrap();
        assert_eq!(assigned, [(1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(splice_reorder(vec![1, 2], 2, 0).is_none());
        assert!(splice_reorder(vec![1, 2], 0, 5).is_none());
        assert!(splice_reorder(Vec::new(), 0, 0).is_none());
    }
}
