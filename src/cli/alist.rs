//! Alist CLI subcommand.
//!
//! This subcommand expands a base graph for a lifting size and prints the
//! parity check matrix in alist format to `stdout`. See
//! [`crate::basegraph`] for more information about the 5G NR base graphs.
//!
//! # Examples
//! The base graph 1 with lifting size 384 can be printed with
//! ```shell
//! $ nr-ldpc alist --base-graph 1 --lifting-size 384
//! ```

use crate::basegraph::BaseGraph;
use crate::cli::Run;
use clap::Parser;

/// Alist CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Prints the expanded parity check matrix in alist format")]
pub struct Args {
    /// Base graph
    #[arg(long)]
    base_graph: BaseGraph,
    /// Lifting size
    #[arg(long)]
    lifting_size: usize,
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        if !self.base_graph.is_supported(self.lifting_size) {
            return Err(format!(
                "lifting size {} is not supported for {}",
                self.lifting_size, self.base_graph
            )
            .into());
        }
        print!("{}", self.base_graph.h(self.lifting_size).alist());
        Ok(())
    }
}
