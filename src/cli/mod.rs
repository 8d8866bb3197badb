//! Author-facing CLI for the Ren documentation corpus.
//!
//! This binary is a collaborator *outside* the core: it loads content, builds a service and
//! calls the public query contract, exactly as a docs site would. The core crates compile
//! without it.
//!
//! ## Commands
//!
//! - `sections` - list doc sections and their categories
//! - `category <name>` - list the entries of a category
//! - `lookup <name>` - exact name lookup
//! - `search <term>` - scored full-text search
//! - `check <file>` - validate a content snapshot and print the full violation report
//!
//! ## Design
//!
//! Command functions return `CliResult<T>` instead of calling `process::exit`; only the
//! top-level [`run`] handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point catches these,
/// prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self { message: message.into(), exit_code }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The Ren documentation corpus tool
#[derive(Parser, Debug)]
#[command(name = "rendocs")]
#[command(version = VERSION)]
#[command(about = "Query and validate the Ren language reference corpus", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Serve from a content snapshot file instead of the built-in reference
    #[arg(long = "snapshot", value_name = "FILE", global = true)]
    pub snapshot: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List doc sections and their categories (default when no subcommand given)
    Sections,

    /// List the entries of a category
    Category {
        /// Category name, authored spelling
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Exact name lookup (case-insensitive)
    Lookup {
        /// Entry or function name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Scored full-text search
    Search {
        /// Search term; tokenized like the index
        #[arg(value_name = "TERM")]
        term: String,
        /// Show at most this many results
        #[arg(short = 'n', long = "limit", value_name = "N", default_value_t = 10)]
        limit: usize,
    },

    /// Validate a content snapshot file and print the full violation report
    Check {
        /// JSON snapshot file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// On success, print the snapshot re-serialized in canonical form
        #[arg(long)]
        canonical: bool,
    },
}

/// Parse arguments, dispatch, print errors, exit.
pub fn run() {
    let cli = Cli::parse();
    let code = match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            error.exit_code
        }
    };
    process::exit(code.0);
}

fn execute(cli: Cli) -> CliResult<()> {
    match cli.command {
        Some(Command::Check { file, canonical }) => commands::check(&file, canonical),
        command => {
            let service = commands::open_service(cli.snapshot.as_deref())?;
            match command {
                None | Some(Command::Sections) => commands::sections(&service),
                Some(Command::Category { name }) => commands::category(&service, &name),
                Some(Command::Lookup { name }) => commands::lookup(&service, &name),
                Some(Command::Search { term, limit }) => commands::search(&service, &term, limit),
                Some(Command::Check { .. }) => Ok(()), // handled above
            }
        }
    }
}
