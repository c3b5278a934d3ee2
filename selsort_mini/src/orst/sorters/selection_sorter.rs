use crate::orst::{select_extremum, SortOrd, Sorter};

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use selsort_mini::orst::{SelectionSorter, Sorter, SortOrd};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter { order: SortOrd::Ascending }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///
/// SelectionSorter { order: SortOrd::Descending }.sort(&mut slice);
/// assert_eq!(slice, [5, 4, 3, 2, 1]);
///```
/// # Explanation
///
/// Selection sort is an in-place comparison sorting
/// algorithm. It has an O(n2) time complexity, which
/// makes it inefficient on large lists, and generally
/// performs worse than the similar insertion sort. Selection sort is noted for its
/// simplicity and has performance advantages over more complicated algorithms
/// in certain situations, particularly where auxiliary memory is
/// limited.
///
/// # Algorithm
///
/// The slice is divided into a sorted prefix, built up from left to right, and the unsorted
/// rest. Each pass finds the smallest (or largest, for [`SortOrd::Descending`]) element of the
/// rest and exchanges it with the leftmost unsorted element, moving the boundary one element to
/// the right.
///
/// The exchange can carry an element past another one that compares equal to it, so the sort is
/// **not stable**. See [`StableSelectionSorter`](crate::orst::StableSelectionSorter) for a
/// variant that is.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionSorter {
    pub order: SortOrd,
}

impl<T> Sorter<T> for SelectionSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        for unsorted in 0..slice.len().saturating_sub(1) {
            let selected = select_extremum(slice, unsorted, self.order);
            if unsorted != selected {
                slice.swap(unsorted, selected);
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const ASCENDING: SelectionSorter = SelectionSorter {
        order: SortOrd::Ascending,
    };

    const DESCENDING: SelectionSorter = SelectionSorter {
        order: SortOrd::Descending,
    };

    #[test]
    fn arbitrary_array() {
        let mut slice = [5, 3, 8, 1, 9, 2];
        ASCENDING.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn arbitrary_array_descending() {
        let mut slice = [5, 3, 8, 1, 9, 2];
        DESCENDING.sort(&mut slice);
        assert_eq!(slice, [9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        ASCENDING.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn sorted_array_descending() {
        let mut slice = (1..10).rev().collect::<Vec<_>>();
        DESCENDING.sort(&mut slice);
        assert_eq!(slice, (1..10).rev().collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        ASCENDING.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted_descending() {
        let mut slice = (1..1000).collect::<Vec<_>>();
        DESCENDING.sort(&mut slice);
        assert_eq!(slice, (1..1000).rev().collect::<Vec<_>>());
    }

    #[test]
    fn all_equal() {
        let mut slice = [5; 5];
        ASCENDING.sort(&mut slice);
        assert_eq!(slice, [5, 5, 5, 5, 5]);

        DESCENDING.sort(&mut slice);
        assert_eq!(slice, [5, 5, 5, 5, 5]);
    }

    #[test]
    fn negative_values() {
        let mut slice = [0, -3, i32::MAX, -1, i32::MIN];
        ASCENDING.sort(&mut slice);
        assert_eq!(slice, [i32::MIN, -3, -1, 0, i32::MAX]);
    }

    // Equal keys get reordered by the exchange. Sorting by the first field only, the two `1`
    // entries swap their relative order.
    #[test]
    fn exchange_is_not_stable() {
        #[derive(Debug, PartialEq, Eq)]
        struct Keyed(i32, char);

        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut slice = [Keyed(1, 'a'), Keyed(1, 'b'), Keyed(0, 'c')];
        ASCENDING.sort(&mut slice);
        assert_eq!(slice, [Keyed(0, 'c'), Keyed(1, 'b'), Keyed(1, 'a')]);
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: [i32; 0] = [];
        ASCENDING.sort(&mut empty);
        DESCENDING.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![42];
        ASCENDING.sort(&mut one);
        assert_eq!(one, vec![42]);
        DESCENDING.sort(&mut one);
        assert_eq!(one, vec![42]);

        let mut two = vec![1, 2];
        ASCENDING.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        ASCENDING.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![1, 2];
        DESCENDING.sort(&mut two);
        assert_eq!(two, vec![2, 1]);

        let mut three = vec![3, 1, 2];
        ASCENDING.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}
