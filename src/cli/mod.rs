//! The scaffolder command-line interface.
//!
//! Parses arguments, sets up logging, wires the real editor and terminal
//! into a [`Workflow`], and turns the result into an exit status.

use std::io;
use std::process;

use clap::Parser;
use termcolor::{ColorChoice, StandardStream};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Command, ScaffoldArgs};
use crate::cli::output::print_error;
use crate::console::Console;
use crate::editor::ExternalEditor;
use crate::errors::ScaffoldResult;
use crate::workflow::{CreateOptions, Outcome, Workflow};

pub mod args;
pub mod output;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "TS_SCAFFOLD_LOG";

/// The main entry point for the CLI.
pub fn run() {
    let args = ScaffoldArgs::parse();
    init_tracing(args.verbose);

    match execute(&args) {
        Ok(outcome) => debug!(?outcome, "finished"),
        Err(e) => {
            print_error(e);
            process::exit(1);
        }
    }
}

fn execute(args: &ScaffoldArgs) -> ScaffoldResult<Outcome> {
    let editor = ExternalEditor::from_env();
    debug!(editor = editor.program(), root = %args.root.display(), "resolved configuration");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), StandardStream::stdout(ColorChoice::Auto));
    let mut workflow = Workflow::new(&args.root, &editor, &mut console);

    match &args.command {
        None => workflow.create(&CreateOptions::default()),
        Some(Command::Create { category, filename }) => workflow.create(&CreateOptions {
            category: category.clone(),
            filename: filename.clone(),
        }),
        Some(Command::Edit { path }) => workflow.edit(path.as_deref()),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("failed to initialize logging: {e}");
    }
}
