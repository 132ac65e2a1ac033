//! Round-trips text through the user's editor.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::errors::{ScaffoldError, ScaffoldResult};

/// Something that lets a user edit a piece of text.
pub trait Editor {
    /// Returns the edited text for `initial`.
    fn edit(&self, initial: &str) -> ScaffoldResult<String>;
}

/// An editor program run as a blocking foreground child process.
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    program: String,
}

impl ExternalEditor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Uses `$EDITOR`, or the platform default when it is unset or empty.
    pub fn from_env() -> Self {
        Self::new(resolve_program(std::env::var_os("EDITOR")))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn launch_error(&self, reason: impl Into<String>) -> ScaffoldError {
        ScaffoldError::EditorLaunch {
            editor: self.program.clone(),
            reason: reason.into(),
        }
    }
}

impl Editor for ExternalEditor {
    fn edit(&self, initial: &str) -> ScaffoldResult<String> {
        let mut file = tempfile::Builder::new()
            .suffix(".tmp")
            .tempfile()
            .map_err(|e| ScaffoldError::io("create temporary file in", std::env::temp_dir(), e))?;
        file.write_all(initial.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| ScaffoldError::io("write", file.path(), e))?;

        // Closing our handle leaves the editor sole owner; the path is still
        // removed when `path` drops, on every return below.
        let path = file.into_temp_path();
        debug!(editor = %self.program, path = %path.display(), "launching editor");

        let status = Command::new(&self.program)
            .arg(&*path)
            .status()
            .map_err(|e| self.launch_error(e.to_string()))?;
        if !status.success() {
            return Err(self.launch_error(format!("editor exited with {status}")));
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| ScaffoldError::io("read", path.to_path_buf(), e))?;
        debug!(bytes = content.len(), "editor returned");
        let temp_file = path.to_path_buf();
        path.close()
            .map_err(|e| ScaffoldError::io("remove temporary file", temp_file, e))?;
        Ok(content)
    }
}

fn resolve_program(configured: Option<OsString>) -> String {
    match configured {
        Some(program) if !program.is_empty() => program.to_string_lossy().into_owned(),
        _ => default_program().to_string(),
    }
}

fn default_program() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else if on_path("vim") {
        "vim"
    } else {
        "nano"
    }
}

fn on_path(name: &str) -> bool {
    std::env::var_os("PATH").is_some_and(|paths| {
        std::env::split_paths(&paths).any(|dir| is_file(&dir.join(name)))
    })
}

fn is_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}
