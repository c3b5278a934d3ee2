//! Input generators and sortedness checks used by the demo and the tests.

use rand::Rng;
use thiserror::Error;

use crate::orst::SortOrd;

/// A small array with three equal values, used to show that a sort keeps equal elements in
/// their input order.
pub const STABILITY_SAMPLE: [i32; 6] = [4, 2, 2, 3, 2, 1];

/// Errors raised while generating fixtures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixtureError {
    /// Random values are drawn from `0..max_value`, which is empty unless `max_value` is positive.
    #[error("random values need a positive upper bound, got {0}")]
    EmptyRange(i32),

    /// Runs hold values up to their length, which must fit in an `i32`.
    #[error("a run of {0} values does not fit in i32")]
    TooLong(usize),
}

/// `size` values drawn uniformly from `0..max_value`.
///
/// # Errors
///
/// Returns [`FixtureError::EmptyRange`] when `max_value` is zero or negative.
///
/// ```
/// use selsort_mini::harness::fixtures;
///
/// let values = fixtures::random(10, 100, &mut rand::thread_rng()).unwrap();
/// assert_eq!(values.len(), 10);
/// assert!(values.iter().all(|v| (0..100).contains(v)));
/// ```
pub fn random<R>(size: usize, max_value: i32, rng: &mut R) -> Result<Vec<i32>, FixtureError>
where
    R: Rng + ?Sized,
{
    if max_value <= 0 {
        return Err(FixtureError::EmptyRange(max_value));
    }

    Ok((0..size).map(|_| rng.gen_range(0..max_value)).collect())
}

// Largest value of a run of `size` values, checked against `i32` before anything is allocated.
fn run_end(size: usize) -> Result<i32, FixtureError> {
    i32::try_from(size).map_err(|_| FixtureError::TooLong(size))
}

/// `0, 1, ..., size - 1`
///
/// # Errors
///
/// Returns [`FixtureError::TooLong`] when `size` exceeds `i32::MAX`.
pub fn ascending(size: usize) -> Result<Vec<i32>, FixtureError> {
    Ok((0..run_end(size)?).collect())
}

/// `size, size - 1, ..., 1`
///
/// # Errors
///
/// Returns [`FixtureError::TooLong`] when `size` exceeds `i32::MAX`.
pub fn descending(size: usize) -> Result<Vec<i32>, FixtureError> {
    Ok((1..=run_end(size)?).rev().collect())
}

/// `size` copies of `value`.
pub fn all_equal(size: usize, value: i32) -> Vec<i32> {
    vec![value; size]
}

pub fn empty() -> Vec<i32> {
    Vec::new()
}

pub fn single(value: i32) -> Vec<i32> {
    vec![value]
}

/// True when no adjacent pair of `slice` is out of `order`.
pub fn is_sorted<T: Ord>(slice: &[T], order: SortOrd) -> bool {
    slice.windows(2).all(|pair| match order {
        SortOrd::Ascending => pair[0] <= pair[1],
        SortOrd::Descending => pair[0] >= pair[1],
    })
}

/// True when `slice` is non-decreasing.
pub fn is_sorted_ascending<T: Ord>(slice: &[T]) -> bool {
    is_sorted(slice, SortOrd::Ascending)
}

/// True when `slice` is non-increasing.
pub fn is_sorted_descending<T: Ord>(slice: &[T]) -> bool {
    is_sorted(slice, SortOrd::Descending)
}
