//! `studrec` - interactive CLI for studentrecords
//!
//! Loads the backing file, then hands the store to the menu shell on the
//! process's standard streams.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use studentrecords::cli::Cli;
use studentrecords::{init_logging, Config, RecordStore, Shell};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_file().to_path_buf());
    debug!("Using backing file {}", data_file.display());

    let stdin = io::stdin();
    let mut shell = Shell::new(RecordStore::new(&data_file), stdin.lock(), io::stdout().lock())
        .with_banner(&config.shell.banner);
    shell.load().context("writing to standard error")?;
    shell.run().context("reading from standard input")?;

    Ok(())
}
