//! Command-line interface for studentrecords.
//!
//! The `studrec` binary is an interactive menu; its flags only choose where
//! configuration and records live and how much is logged.

use std::path::PathBuf;

use clap::Parser;

use crate::logging::Verbosity;

/// studrec - Manage student records from the terminal
///
/// Reads every record from a comma-separated backing file, presents a menu
/// to add, update, delete and look up students, and rewrites the file after
/// each change.
#[derive(Debug, Parser)]
#[command(name = "studrec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Backing file to use instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}
