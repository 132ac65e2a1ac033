//! The create and edit pipelines.
//!
//! Both run the same cycle: build a template, hand it to the editor, parse
//! what comes back, and persist the record. Edit mode first locates and
//! loads an existing test file.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use termcolor::WriteColor;
use tracing::debug;

use crate::console::Console;
use crate::discovery::TestDiscoverer;
use crate::editor::Editor;
use crate::errors::{ScaffoldError, ScaffoldResult};
use crate::record::TestRecord;
use crate::{parser, persist, template};

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Saved(PathBuf),
    /// The user quit the picker or declined to overwrite.
    Cancelled,
}

/// Options for creating a new test.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    pub category: String,
    pub filename: Option<String>,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            category: "math".to_string(),
            filename: None,
        }
    }
}

/// Runs create and edit cycles against one test root.
pub struct Workflow<'a, E, R, W> {
    root: &'a Path,
    editor: &'a E,
    console: &'a mut Console<R, W>,
}

impl<'a, E, R, W> Workflow<'a, E, R, W>
where
    E: Editor,
    R: BufRead,
    W: WriteColor,
{
    pub fn new(root: &'a Path, editor: &'a E, console: &'a mut Console<R, W>) -> Self {
        Self {
            root,
            editor,
            console,
        }
    }

    /// Creates a new test under `<root>/<category>`.
    pub fn create(&mut self, options: &CreateOptions) -> ScaffoldResult<Outcome> {
        let record = self.edit_record(None)?;

        let path = persist::new_test_path(
            self.root,
            &options.category,
            options.filename.as_deref(),
            &record,
        );
        persist::ensure_parent(&path)?;
        if path.exists() && !self.console.confirm_overwrite(&path)? {
            self.console.notice("Operation cancelled.")?;
            return Ok(Outcome::Cancelled);
        }

        self.finish(path, &record)
    }

    /// Edits the test at `path`, or one picked from the test root.
    pub fn edit(&mut self, path: Option<&Path>) -> ScaffoldResult<Outcome> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match self.pick()? {
                Some(path) => path,
                None => return Ok(Outcome::Cancelled),
            },
        };

        self.console
            .say(format_args!("Editing test file: {}", path.display()))?;
        let existing = TestRecord::load(&path)?;
        let record = self.edit_record(Some(&existing))?;
        self.finish(path, &record)
    }

    fn pick(&mut self) -> ScaffoldResult<Option<PathBuf>> {
        let files = TestDiscoverer::discover_test_files(self.root)?;
        debug!(count = files.len(), root = %self.root.display(), "discovered test files");
        if files.is_empty() {
            return Err(ScaffoldError::NoTestFiles {
                root: self.root.to_path_buf(),
            });
        }
        self.console.select_test_file(&files)
    }

    /// One pass through the editor, from template to parsed record.
    fn edit_record(&mut self, existing: Option<&TestRecord>) -> ScaffoldResult<TestRecord> {
        let action = if existing.is_some() { "Editing" } else { "Creating" };
        self.console
            .say(format_args!("{action} a TokenScript compliance test"))?;
        self.console.say("Opening editor to input test details...")?;

        let text = self.editor.edit(&template::render(existing))?;
        if text.is_empty() {
            return Err(ScaffoldError::EmptyInput);
        }
        parser::parse(&text)
    }

    fn finish(&mut self, path: PathBuf, record: &TestRecord) -> ScaffoldResult<Outcome> {
        persist::save(&path, record)?;
        self.console
            .success(format_args!("Test successfully saved at: {}", path.display()))?;
        Ok(Outcome::Saved(path))
    }
}
