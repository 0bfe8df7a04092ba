//! Formulary CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Normal quit
//! - 1: A data file could not be loaded, or the session failed

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use formulary_core::{ActionError, DataStore, Session};

mod cli;
mod terminal;

use cli::Cli;
use terminal::TerminalPrompter;

/// Process exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const FAILURE: u8 = 1;
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            report_failure(&mut io::stderr(), &e);
            ExitCode::from(ExitCodes::FAILURE)
        }
    }
}

/// Print the fatal error once, with its context chain.
fn report_failure<W: Write>(out: &mut W, error: &anyhow::Error) {
    let _ = writeln!(out, "Error: {:#}", error);
}

/// Log to stderr so tables and prompts on stdout stay readable.
fn init_logging(verbose: bool) {
    let default_directives = if verbose {
        "formulary=debug,formulary_core=debug,warn"
    } else {
        "formulary=info,formulary_core=info,warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    // Already initialised is fine
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let store = DataStore::new(&cli.data_dir);
    let mut session = Session::open(store)
        .with_context(|| format!("Failed to load data from {:?}", cli.data_dir))?;

    let mut prompter = TerminalPrompter::stdio();
    match session.run(&mut prompter) {
        Ok(()) => Ok(()),
        Err(ActionError::Prompt(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
            info!("input closed, quitting");
            Ok(())
        }
        Err(e) => Err(e).context("Session ended with an error"),
    }
}
