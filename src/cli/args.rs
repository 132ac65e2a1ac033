//! Defines the command-line arguments and subcommands for the scaffolder.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "ts-scaffold",
    version,
    about = "Create or edit TokenScript compliance tests in your editor."
)]
pub struct ScaffoldArgs {
    /// Directory holding the test files, grouped into category subdirectories.
    #[arg(long, global = true, env = "TS_SCAFFOLD_ROOT", default_value = "tests")]
    pub root: PathBuf,

    /// Log each pipeline step to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `create` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new test.
    Create {
        /// Test category (subdirectory under the test root).
        #[arg(long, default_value = "math")]
        category: String,
        /// Filename for the test, `.json` is appended when missing.
        #[arg(long)]
        filename: Option<String>,
    },
    /// Edit an existing test.
    Edit {
        /// Path to the test file to edit; pick from a menu when omitted.
        #[arg(long)]
        path: Option<PathBuf>,
    },
}
