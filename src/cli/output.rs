//! Handles error output for the CLI.

use miette::Report;

use crate::errors::ScaffoldError;

/// Renders an error through `miette` on stderr.
pub fn print_error(error: ScaffoldError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}
