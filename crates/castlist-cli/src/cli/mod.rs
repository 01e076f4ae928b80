//! CLI for the castlist film-cast printer.

use anyhow::Result;
use castlist_core::endpoint::{Endpoint, DEFAULT_API_BASE};
use castlist_core::roster;
use clap::Parser;
use std::io::{self, Write};

/// Top-level CLI: a single positional film identifier.
#[derive(Debug, Parser)]
#[command(name = "castlist")]
#[command(about = "castlist: print a film's character names, one per line", long_about = None)]
pub struct Cli {
    /// Numeric film identifier on the film-data API.
    pub film_id: u32,
}

/// Fetches the film and prints its cast to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let endpoint = Endpoint::new(DEFAULT_API_BASE)?;
    tracing::debug!("using API base {}", DEFAULT_API_BASE);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    roster::print_film_cast(&endpoint, cli.film_id, &mut out)?;
    out.flush()?;
    Ok(())
}
