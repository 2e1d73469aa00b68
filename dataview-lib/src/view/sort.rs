//! Row sorting

use std::cmp::Ordering;

use crate::columns::ColumnModel;
use crate::model::Value;
use crate::state::Direction;
use crate::state::Sorting;

/// Sorts snapshot indices by the active sort.
///
/// The sort is stable: rows with equal keys keep their input order, and an
/// empty (or entirely unknown) sort leaves the order untouched.
pub fn sort_indices<R>(rows: &[R], indices: &mut [usize], columns: &ColumnModel<R>, sorting: &Sorting) {
    let keys: Vec<_> = sorting
        .entries()
        .iter()
        .filter_map(|entry| {
            columns
                .column(&entry.column_id)
                .filter(|c| c.is_sortable())
                .map(|c| (c, entry.direction))
        })
        .collect();
    if keys.is_empty() {
        return;
    }

    // Extract each key once per row instead of once per comparison
    let mut decorated: Vec<(Vec<Value>, usize)> = indices
        .iter()
        .map(|&i| (keys.iter().map(|(c, _)| c.value(&rows[i])).collect(), i))
        .collect();

    decorated.sort_by(|(a, _), (b, _)| {
        for (k, (_, direction)) in keys.iter().enumerate() {
            let ord = match direction {
                Direction::Asc => a[k].compare(&b[k]),
                Direction::Desc => b[k].compare(&a[k]),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });

    for (slot, (_, i)) in indices.iter_mut().zip(decorated) {
        *slot = i;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::ColumnDescriptor;
    use crate::model::Record;

    fn model() -> ColumnModel<Record> {
        ColumnModel::build(
            vec![
                ColumnDescriptor::field("name", "Name"),
                ColumnDescriptor::field("price", "Price"),
                ColumnDescriptor::field("notes", "Notes").not_sortable(),
            ],
            None,
            false,
        )
        .unwrap()
    }

    fn rows() -> Vec<Record> {
        vec![
            Record::new("a").set("name", "Cart").set("price", 30i64).set("notes", "z"),
            Record::new("b").set("name", "Bud").set("price", 10i64).set("notes", "a"),
            Record::new("c").set("name", "Ash").set("price", 30i64).set("notes", "m"),
        ]
    }

    #[test]
    fn test_sort_asc_desc() {
        let rows = rows();
        let mut indices = vec![0, 1, 2];
        sort_indices(&rows, &mut indices, &model(), &Sorting::by("name", Direction::Asc));
        assert_eq!(indices, vec![2, 1, 0]);
        sort_indices(&rows, &mut indices, &model(), &Sorting::by("name", Direction::Desc));
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_is_stable() {
        let rows = rows();
        let mut indices = vec![0, 1, 2];
        sort_indices(&rows, &mut indices, &model(), &Sorting::by("price", Direction::Desc));
        assert_eq!(indices, vec![0, 2, 1]);
    }

    #[test]
    fn test_unsortable_and_unknown_ignored() {
        let rows = rows();
        let mut indices = vec![0, 1, 2];
        sort_indices(&rows, &mut indices, &model(), &Sorting::by("notes", Direction::Asc));
        assert_eq!(indices, vec![0, 1, 2]);
        sort_indices(&rows, &mut indices, &model(), &Sorting::by("gone", Direction::Asc));
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
