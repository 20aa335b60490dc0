//! Encode CLI subcommand.
//!
//! This subcommand encodes code blocks read from a file of unpacked bits
//! (one byte per bit) and writes the codewords, systematic bits followed by
//! parity bits, to an output file in the same format.
//!
//! # Examples
//! ```shell
//! $ nr-ldpc encode --base-graph 2 --lifting-size 72 --ncols 8 input.bits output.bits
//! ```

use crate::basegraph::BaseGraph;
use crate::cli::Run;
use crate::encoder::{self, KernelImplementation, Scratch};
use clap::Parser;
use std::{
    error::Error,
    fs::File,
    io::{ErrorKind, Read, Write},
    path::PathBuf,
};

/// Encode CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Performs LDPC encoding")]
pub struct Args {
    /// Base graph
    #[arg(long)]
    base_graph: BaseGraph,
    /// Lifting size
    #[arg(long)]
    lifting_size: usize,
    /// Number of transmitted systematic columns (defaults to all)
    #[arg(long)]
    ncols: Option<usize>,
    /// Kernel implementation (bypasses the dispatch table)
    #[arg(long)]
    kernel: Option<KernelImplementation>,
    /// input file (systematic bits as unpacked bits)
    pub input: PathBuf,
    /// output file (codewords as unpacked bits)
    pub output: PathBuf,
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let bg = self.base_graph;
        let zc = self.lifting_size;
        if !bg.is_supported(zc) {
            return Err(format!("lifting size {} is not supported for {}", zc, bg).into());
        }
        let ncols = self.ncols.unwrap_or_else(|| bg.systematic_columns());
        if ncols > bg.systematic_columns() {
            return Err(format!(
                "{} has at most {} systematic columns",
                bg,
                bg.systematic_columns()
            )
            .into());
        }
        let mut input = File::open(&self.input)?;
        let mut output = File::create(&self.output)?;
        let mut scratch = Scratch::new();
        let mut cc = vec![0; ncols * zc];
        let mut d = vec![0; bg.parity_rows() * zc];
        loop {
            match input.read_exact(&mut cc[..]) {
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
                ret => ret?,
            };
            match self.kernel {
                Some(kernel) => {
                    scratch.replicate(&cc, zc, ncols);
                    kernel.kernel().encode(bg, zc, ncols, &mut scratch, &mut d);
                }
                None => encoder::encode(bg, zc, &cc, ncols, &mut d, &mut scratch),
            }
            output.write_all(&cc)?;
            output.write_all(&d)?;
        }
        Ok(())
    }
}
