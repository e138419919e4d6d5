//! # directory-livegrep CLI
//!
//! Binary entry point. Parses arguments with `clap`, runs the generation
//! pipeline from the library crate and reports the result.
//!
//! Errors returned from `main` are printed by `anyhow` on stderr and end the
//! process with exit code 1. Usage errors are reported by `clap` with exit
//! code 2.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
