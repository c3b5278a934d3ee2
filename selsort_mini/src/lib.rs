//! # Introduction
//!
//! Selection sort in ascending, descending and stable flavours, together with the fixtures used
//! to demonstrate them and a benchmark that counts the comparisons each one makes.
//!
//! - [`orst`] holds the sorters.
//! - [`harness`] generates inputs and prints the before/after demo.

pub mod harness;
pub mod orst;

use clap::Args;
use rand::{rngs::StdRng, SeedableRng};

use harness::{Demo, DEFAULT_MAX_VALUE, DEFAULT_SIZE};
use orst::benchmark::{self, DEFAULT_MAX_SIZE};

/// Prints each fixture before and after sorting. Install the `selsort` crate and run `selsort
/// --help` to see what options are available
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Length of the generated arrays.
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Exclusive upper bound of the random values.
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE, value_parser = clap::value_parser!(i32).range(1..))]
    max_value: i32,

    /// Seed for the random arrays. Without it every run prints different random arrays.
    #[arg(long)]
    seed: Option<u64>,
}

/// Counts the comparisons made by every selection sort variant over growing random inputs.
#[derive(Debug, Args)]
pub struct BenchArgs {
    /// Size of the largest input to sort.
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: usize,

    /// Seed for the random inputs.
    #[arg(long)]
    seed: Option<u64>,
}

impl DemoArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let demo = Demo {
            size: self.size,
            max_value: self.max_value,
        };

        let mut stdout = std::io::stdout().lock();
        match self.seed {
            Some(seed) => demo.run(&mut stdout, &mut StdRng::seed_from_u64(seed)),
            None => demo.run(&mut stdout, &mut rand::thread_rng()),
        }
    }
}

impl BenchArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.seed {
            Some(seed) => benchmark::run_orst(self.max_size, &mut StdRng::seed_from_u64(seed)),
            None => benchmark::run_orst(self.max_size, &mut rand::thread_rng()),
        }
    }
}
