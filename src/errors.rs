//! Error handling for the scaffolding pipeline.
//!
//! Every failure mode of a create or edit run is a variant of
//! [`ScaffoldError`]. Library code only ever returns these; deciding to
//! terminate the process is left to the CLI entry point, which renders them
//! through `miette`.

use std::path::PathBuf;
use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Shorthand for results produced anywhere in this crate.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    /// The editor binary could not be spawned or exited unsuccessfully.
    #[error("Error opening editor {editor}: {reason}")]
    #[diagnostic(
        code(scaffold::editor::launch),
        help("Please set the EDITOR environment variable.")
    )]
    EditorLaunch { editor: String, reason: String },

    #[error("No input provided")]
    #[diagnostic(code(scaffold::editor::empty))]
    EmptyInput,

    /// The `context:` value could not be decoded as JSON.
    #[error("Error parsing context JSON: {message}")]
    #[diagnostic(
        code(scaffold::parse::context),
        help("Please check the format. The context must be a JSON value, usually an object of variables.")
    )]
    ContextDecode {
        message: String,
        #[source_code]
        src: Arc<NamedSource<String>>,
        #[label("invalid JSON here")]
        span: SourceSpan,
    },

    #[error("Error opening or parsing test file {}", path.display())]
    #[diagnostic(code(scaffold::record::read))]
    ExistingFileRead {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("No test files found under {}", root.display())]
    #[diagnostic(
        code(scaffold::discovery::empty),
        help("Create a test first with `ts-scaffold create`.")
    )]
    NoTestFiles { root: PathBuf },

    #[error("Failed to walk directory {}", root.display())]
    #[diagnostic(code(scaffold::discovery::walk))]
    Discovery {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to {action} {}", path.display())]
    #[diagnostic(code(scaffold::io))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize test record")]
    #[diagnostic(code(scaffold::record::serialize))]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl ScaffoldError {
    /// Wraps an I/O failure with the action and path it concerned.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Builds a context decode error pointing at the decoder's reported position.
    pub fn context_decode(text: &str, err: &serde_json::Error) -> Self {
        let offset = offset_of(text, err.line(), err.column());
        let len = text[offset..].chars().next().map_or(0, char::len_utf8);
        ScaffoldError::ContextDecode {
            message: err.to_string(),
            src: Arc::new(NamedSource::new("context", text.to_string())),
            span: SourceSpan::new(offset.into(), len),
        }
    }
}

/// Converts a 1-based line/column pair from `serde_json` into a byte offset.
fn offset_of(text: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let rest = text.get(line_start..).unwrap_or_default();
    let line_len = rest.find('\n').unwrap_or(rest.len());
    let mut offset = (line_start + column.saturating_sub(1).min(line_len)).min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
