use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::{
    cell::Cell,
    rc::Rc,
    time::{Duration, Instant},
};
use tracing::{debug, info};

use prettytable::{row, Table};

use super::{SelectionSorter, SortOrd, Sorter, StableSelectionSorter};

const ZERO: usize = 0;
const ONE: usize = 1;
const HUNDRED: usize = 100;
const THOUSAND: usize = 1_000;

// Number of selection sort variants measured per size.
const VARIANTS: u64 = 3;

/// Largest input the benchmark sorts unless told otherwise.
pub const DEFAULT_MAX_SIZE: usize = 4_000;

/// Wraps an element so that every comparison made on it is counted. Only `elem` takes part in
/// the ordering.
#[derive(Clone)]
pub struct SortEvaluator<T> {
    elem: T,
    // Bumped on every comparison. Shared by all elements of one run.
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }

    fn count(&self) {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count();
        self.elem == other.elem
    }
}

// `<`, `<=`, `>` and `>=` all go through `partial_cmp`, so each of them counts once.
impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.count();
        self.elem.partial_cmp(&other.elem)
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.count();
        self.elem.cmp(&other.elem)
    }
}

/// Outcome of sorting one input with one sorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub comparisons: usize,
    pub elapsed: Duration,
}

/// Sorts a copy of `values` with `sorter` and counts the comparisons it makes.
///
/// ```
/// use selsort_mini::orst::{benchmark, StableSelectionSorter};
///
/// let taken = benchmark::measure(StableSelectionSorter, &[3, 1, 2]);
/// assert_eq!(taken.comparisons, 3);
/// ```
pub fn measure<T, S>(sorter: S, values: &[T]) -> Measurement
where
    T: Ord + Clone,
    S: Sorter<SortEvaluator<T>>,
{
    let counter = Rc::new(Cell::new(0));
    let mut evaluators = values
        .iter()
        .cloned()
        .map(|elem| SortEvaluator::new(elem, counter.clone()))
        .collect::<Vec<_>>();

    let now = Instant::now();
    sorter.sort(&mut evaluators);
    let elapsed = now.elapsed();

    Measurement {
        comparisons: counter.get(),
        elapsed,
    }
}

/// The input sizes benchmarked for a given upper limit. `max_size` itself is always last.
pub fn sizes(max_size: usize) -> Vec<usize> {
    let mut sizes = [ZERO, ONE, HUNDRED, THOUSAND]
        .into_iter()
        .filter(|&n| n < max_size)
        .collect::<Vec<_>>();
    sizes.push(max_size);
    sizes
}

/// Prints a table of comparisons made and time taken by every selection sort variant for each of
/// the [`sizes`] up to `max_size`. All variants sort the same random input.
pub fn run_orst<R: Rng + ?Sized>(max_size: usize, rng: &mut R) -> anyhow::Result<()> {
    for n in sizes(max_size) {
        info!(size = n, "benchmarking selection sorts");
        let values = (0..n).map(|_| rng.gen::<i32>()).collect::<Vec<_>>();

        let pb = ProgressBar::new(VARIANTS);
        pb.set_style(ProgressStyle::with_template(
            "Selection Sort -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] Sorters: ({pos}/{len}, ETA: {eta})",
        )?);

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold()
        ]);

        let step = |name: &'static str, taken: Measurement| {
            debug!(
                sorter = name,
                size = n,
                comparisons = taken.comparisons,
                "sorted"
            );
            pb.inc(1);
            (name, taken)
        };

        let rows = [
            step(
                "Selection Sort",
                measure(
                    SelectionSorter {
                        order: SortOrd::Ascending,
                    },
                    &values,
                ),
            ),
            step(
                "Selection Sort (descending)",
                measure(
                    SelectionSorter {
                        order: SortOrd::Descending,
                    },
                    &values,
                ),
            ),
            step(
                "Stable Selection Sort",
                measure(StableSelectionSorter, &values),
            ),
        ];

        for (name, taken) in rows {
            table.add_row(row![
                name,
                taken.comparisons.to_string(),
                format!("{:?}", taken.elapsed)
            ]);
        }
        pb.finish_and_clear();

        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );
        table.printstd();
        println!();
    }

    Ok(())
}
