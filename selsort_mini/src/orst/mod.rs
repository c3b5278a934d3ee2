//! Selection sort in three flavours: ascending, descending and stable.
//!
//! Every variant walks the slice from left to right, finds the extremum of the unsorted suffix and
//! relocates it to the boundary of the sorted prefix. They differ only in which extremum they look
//! for and in how it is moved.
//!
//! # Example
//!
//! ```
//! use selsort_mini::orst::{SelectionSorter, Sorter, SortOrd};
//!
//! let mut slice = vec![5, 3, 8, 1, 9, 2];
//! SelectionSorter { order: SortOrd::Descending }.sort(&mut slice);
//! assert_eq!(vec![9, 8, 5, 3, 2, 1], slice);
//! ```

pub mod benchmark;
mod sorters;

pub use sorters::selection_sorter::SelectionSorter;
pub use sorters::stable_selection_sorter::StableSelectionSorter;

/// The sorting algorithm must implement the trait `Sorter`.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]);
}

/// The order a selection pass builds its sorted prefix in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortOrd {
    /// Smallest first. Each pass selects the minimum of the rest.
    #[default]
    Ascending,

    /// Largest first. Each pass selects the maximum of the rest.
    Descending,
}

impl SortOrd {
    /// Returns true when `candidate` should replace `current` as the selected element.
    ///
    /// The comparison is strict so the first occurrence of an extremum always wins.
    #[inline]
    fn prefers<T: Ord>(self, candidate: &T, current: &T) -> bool {
        match self {
            SortOrd::Ascending => candidate < current,
            SortOrd::Descending => candidate > current,
        }
    }
}

// Index of the extremum of `slice[start..]`. `start` must be in bounds.
fn select_extremum<T: Ord>(slice: &[T], start: usize, order: SortOrd) -> usize {
    let mut selected = start;
    for i in (start + 1)..slice.len() {
        if order.prefers(&slice[i], &slice[selected]) {
            selected = i;
        }
    }
    selected
}

/// Sorts `slice` into non-decreasing order with a swapping selection sort. Not stable.
///
/// ```
/// let mut slice = [5, 3, 8, 1, 9, 2];
/// selsort_mini::orst::sort_ascending(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 5, 8, 9]);
/// ```
pub fn sort_ascending<T: Ord>(slice: &mut [T]) {
    SelectionSorter {
        order: SortOrd::Ascending,
    }
    .sort(slice)
}

/// Sorts `slice` into non-increasing order with a swapping selection sort. Not stable.
///
/// ```
/// let mut slice = [5, 3, 8, 1, 9, 2];
/// selsort_mini::orst::sort_descending(&mut slice);
/// assert_eq!(slice, [9, 8, 5, 3, 2, 1]);
/// ```
pub fn sort_descending<T: Ord>(slice: &mut [T]) {
    SelectionSorter {
        order: SortOrd::Descending,
    }
    .sort(slice)
}

/// Sorts `slice` into non-decreasing order, keeping equal elements in their original order.
///
/// ```
/// let mut slice = [4, 2, 2, 3, 2, 1];
/// selsort_mini::orst::sort_stable(&mut slice);
/// assert_eq!(slice, [1, 2, 2, 2, 3, 4]);
/// ```
pub fn sort_stable<T: Ord>(slice: &mut [T]) {
    StableSelectionSorter.sort(slice)
}
