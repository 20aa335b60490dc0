//! `nr-ldpc` CLI application
//!
//! The CLI application is organized in several subcommands. The supported
//! subcommands can be seen by running `nr-ldpc`. See the modules below for
//! examples and more information about how to use each subcommand.

use clap::Parser;
use std::error::Error;

pub mod alist;
pub mod check;
pub mod encode;

/// Trait to run a CLI subcommand
pub trait Run {
    /// Run the CLI subcommand
    fn run(&self) -> Result<(), Box<dyn Error>>;
}

/// CLI arguments.
#[derive(Debug, Parser)]
#[command(author, version, name = "nr-ldpc", about = "5G NR LDPC encoder")]
pub enum Args {
    /// alist subcommand
    Alist(alist::Args),
    /// check subcommand
    Check(check::Args),
    /// encode subcommand
    Encode(encode::Args),
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        match self {
            Args::Alist(x) => x.run(),
            Args::Check(x) => x.run(),
            Args::Encode(x) => x.run(),
        }
    }
}
