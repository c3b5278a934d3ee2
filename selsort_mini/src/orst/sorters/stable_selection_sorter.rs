use crate::orst::{select_extremum, SortOrd, Sorter};

/// A stable variant of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort#Variants)
///
/// # Usage
///```
/// use selsort_mini::orst::{StableSelectionSorter, Sorter};
///
/// let mut slice = [4, 2, 2, 3, 2, 1];
/// StableSelectionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 2, 2, 3, 4]);
///```
/// # Explanation
///
/// The minimum of the unsorted rest is selected exactly as in
/// [`SelectionSorter`](crate::orst::SelectionSorter). Instead of exchanging it with the leftmost
/// unsorted element, every element between the boundary and the minimum is shifted one slot to
/// the right and the minimum is written into the gap at the boundary.
///
/// Shifting moves each element by exactly one position, so no element ever jumps over another
/// one that compares equal to it and the original order of equal elements is kept.
///
/// The number of comparisons is the same as the swapping version. Data movement grows from one
/// exchange per pass to up to `n` moves per pass, which keeps the whole sort at O(n2).
#[derive(Debug, Default, Clone, Copy)]
pub struct StableSelectionSorter;

impl<T> Sorter<T> for StableSelectionSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        for unsorted in 0..slice.len().saturating_sub(1) {
            let smallest_in_rest = select_extremum(slice, unsorted, SortOrd::Ascending);
            if unsorted != smallest_in_rest {
                // Shift `[unsorted, smallest_in_rest)` right by one, minimum lands at `unsorted`.
                slice[unsorted..=smallest_in_rest].rotate_right(1);
            }
        }
    }
}
