//! Check CLI subcommand.
//!
//! This subcommand encodes random code blocks for every supported
//! `(base graph, lifting size)` combination and verifies the parity check
//! equations of the expanded parity check matrix against the codewords. The
//! combinations are checked in parallel.
//!
//! # Examples
//! ```shell
//! $ nr-ldpc check --trials 20
//! ```

use crate::basegraph::BaseGraph;
use crate::cli::Run;
use crate::encoder::{self, Scratch};
use clap::Parser;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::error::Error;

/// Check CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Checks the encoder against the expanded parity check matrices")]
pub struct Args {
    /// Number of random code blocks per combination
    #[arg(long, default_value_t = 10)]
    trials: usize,
    /// RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl Args {
    fn check_combination(&self, bg: BaseGraph, zc: usize) -> Result<(), String> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ (zc as u64) << 2 ^ bg as u64);
        let h = bg.h(zc);
        let ncols = bg.systematic_columns();
        let mut scratch = Scratch::new();
        let mut d = vec![0; bg.parity_rows() * zc];
        for trial in 0..self.trials {
            let cc: Vec<u8> = (0..ncols * zc).map(|_| rng.gen_range(0..=1)).collect();
            encoder::encode(bg, zc, &cc, ncols, &mut d, &mut scratch);
            for row in 0..h.num_rows() {
                let parity = h.iter_row(row).fold(0u8, |acc, &col| {
                    acc ^ if col < ncols * zc {
                        cc[col]
                    } else {
                        d[col - ncols * zc]
                    }
                });
                if parity != 0 {
                    return Err(format!(
                        "{} Zc = {}: parity check failed in trial {} at row {}",
                        bg, zc, trial, row
                    ));
                }
            }
        }
        log::info!("{} Zc = {}: {} trials ok", bg, zc, self.trials);
        Ok(())
    }
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let combinations: Vec<(BaseGraph, usize)> = enum_iterator::all::<BaseGraph>()
            .flat_map(|bg| bg.lifting_sizes().iter().map(move |&zc| (bg, zc)))
            .collect();
        combinations
            .par_iter()
            .try_for_each(|&(bg, zc)| self.check_combination(bg, zc))?;
        println!("{} combinations ok", combinations.len());
        Ok(())
    }
}
