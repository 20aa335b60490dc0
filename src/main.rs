//! `nr-ldpc` CLI application.

use clap::Parser;
use nr_ldpc::cli::{Args, Run};
use std::error::Error;

#[termination::display]
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    Args::parse().run()
}
