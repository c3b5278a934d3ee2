//! A console walk-through of the selection sorters.
//!
//! [`Demo::run`] builds a fixed list of fixtures, sorts a copy of each one and prints the array
//! before and after, followed by a sortedness check.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use selsort_mini::harness::Demo;
//!
//! let mut out = Vec::new();
//! Demo::default()
//!     .run(&mut out, &mut StdRng::seed_from_u64(1))
//!     .unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("Stable  : [1, 2, 2, 2, 3, 4]"));
//! ```

pub mod fixtures;

use std::io::Write;

use colored::Colorize;
use rand::Rng;
use tracing::{debug, info};

use crate::orst::{SelectionSorter, SortOrd, Sorter, StableSelectionSorter};
use fixtures::FixtureError;

/// Length of the generated fixtures when none is given.
pub const DEFAULT_SIZE: usize = 15;

/// Exclusive upper bound for random values when none is given.
pub const DEFAULT_MAX_VALUE: i32 = 100;

const SINGLE_VALUE: i32 = 42;
const UNIFORM_VALUE: i32 = 5;

/// Settings for one demo run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demo {
    pub size: usize,
    pub max_value: i32,
}

impl Default for Demo {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

// One before/after block of the demo output.
struct Showcase {
    title: &'static str,
    input: Vec<i32>,
    sorter: &'static dyn Sorter<i32>,
    original_label: &'static str,
    sorted_label: &'static str,
    check: Option<SortOrd>,
}

impl Showcase {
    fn print<W: Write + ?Sized>(&self, out: &mut W) -> anyhow::Result<()> {
        debug!(title = self.title, len = self.input.len(), "sorting fixture");

        let mut sorted = self.input.clone();
        self.sorter.sort(&mut sorted);

        writeln!(out, "{}", format!("=== {} ===", self.title).bold().blue())?;
        writeln!(out, "{}{:?}", self.original_label, self.input)?;
        writeln!(out, "{}{:?}", self.sorted_label, sorted)?;
        if let Some(order) = self.check {
            writeln!(out, "Is sorted? {}", fixtures::is_sorted(&sorted, order))?;
        }
        writeln!(out)?;

        Ok(())
    }
}

impl Demo {
    /// Prints every showcase to `out`, drawing random fixtures from `rng`.
    ///
    /// # Errors
    ///
    /// Fails when `max_value` is not positive, when `size` does not fit in an `i32`, or when
    /// writing to `out` fails.
    pub fn run<W, R>(&self, out: &mut W, rng: &mut R) -> anyhow::Result<()>
    where
        W: Write + ?Sized,
        R: Rng + ?Sized,
    {
        info!(
            size = self.size,
            max_value = self.max_value,
            "running selection sort demo"
        );

        for showcase in self.showcases(rng)? {
            showcase.print(out)?;
        }
        out.flush()?;

        Ok(())
    }

    fn showcases<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Showcase>, FixtureError> {
        const ASCENDING: &SelectionSorter = &SelectionSorter {
            order: SortOrd::Ascending,
        };
        const DESCENDING: &SelectionSorter = &SelectionSorter {
            order: SortOrd::Descending,
        };
        const STABLE: &StableSelectionSorter = &StableSelectionSorter;

        // Checked before any random array of `size` values is drawn.
        let ascending_run = fixtures::ascending(self.size)?;
        let descending_run = fixtures::descending(self.size)?;

        let ascending = |title, input| Showcase {
            title,
            input,
            sorter: ASCENDING,
            original_label: "Original: ",
            sorted_label: "Sorted  : ",
            check: Some(SortOrd::Ascending),
        };

        Ok(vec![
            ascending(
                "Random Array (Selection Sort Ascending)",
                fixtures::random(self.size, self.max_value, rng)?,
            ),
            ascending("Already Sorted Ascending Array", ascending_run),
            ascending(
                "Descending Array (Ascending Selection Sort)",
                descending_run,
            ),
            ascending(
                "All Elements Equal",
                fixtures::all_equal(self.size, UNIFORM_VALUE),
            ),
            ascending("Edge Case: Empty Array", fixtures::empty()),
            ascending("Edge Case: Single Element", fixtures::single(SINGLE_VALUE)),
            Showcase {
                title: "Selection Sort in Descending Order",
                input: fixtures::random(self.size, self.max_value, rng)?,
                sorter: DESCENDING,
                original_label: "Original:   ",
                sorted_label: "Descending: ",
                check: Some(SortOrd::Descending),
            },
            Showcase {
                title: "Stable Selection Sort",
                input: fixtures::STABILITY_SAMPLE.to_vec(),
                sorter: STABLE,
                original_label: "Original: ",
                sorted_label: "Stable  : ",
                check: None,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn render(demo: Demo, seed: u64) -> String {
        let mut out = Vec::new();
        demo.run(&mut out, &mut StdRng::seed_from_u64(seed)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_every_showcase_in_order() {
        let text = render(Demo::default(), 3);
        let titles = [
            "Random Array (Selection Sort Ascending)",
            "Already Sorted Ascending Array",
            "Descending Array (Ascending Selection Sort)",
            "All Elements Equal",
            "Edge Case: Empty Array",
            "Edge Case: Single Element",
            "Selection Sort in Descending Order",
            "Stable Selection Sort",
        ];

        let mut from = 0;
        for title in titles {
            let at = text[from..]
                .find(title)
                .unwrap_or_else(|| panic!("missing or out of order: {title}"));
            from += at + title.len();
        }
    }

    #[test]
    fn every_check_passes() {
        let text = render(Demo::default(), 11);
        assert_eq!(text.matches("Is sorted? true").count(), 7);
        assert!(!text.contains("Is sorted? false"));
    }

    #[test]
    fn fixed_fixtures_are_printed() {
        let text = render(Demo { size: 4, max_value: 10 }, 0);
        assert!(text.contains("Original: [0, 1, 2, 3]"));
        assert!(text.contains("Original: [4, 3, 2, 1]"));
        assert!(text.contains("Sorted  : [1, 2, 3, 4]"));
        assert!(text.contains("Sorted  : [5, 5, 5, 5]"));
        assert!(text.contains("Original: []\nSorted  : []\n"));
        assert!(text.contains("Original: [42]\nSorted  : [42]\n"));
        assert!(text.contains("Original: [4, 2, 2, 3, 2, 1]\nStable  : [1, 2, 2, 2, 3, 4]\n"));
    }

    #[test]
    fn rejects_empty_random_range() {
        let mut out = Vec::new();
        let demo = Demo {
            size: 3,
            max_value: 0,
        };
        let err = demo
            .run(&mut out, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<FixtureError>(),
            Some(&FixtureError::EmptyRange(0))
        );
        assert!(out.is_empty());
    }

    #[test]
    fn rejects_runs_longer_than_i32() {
        let mut out = Vec::new();
        let size = i32::MAX as usize + 1;
        let demo = Demo {
            size,
            max_value: 10,
        };
        let err = demo
            .run(&mut out, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<FixtureError>(),
            Some(&FixtureError::TooLong(size))
        );
        assert!(out.is_empty());
    }
}
