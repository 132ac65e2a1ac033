//! Turns edited template text back into a [`TestRecord`].
//!
//! The text is scanned line by line with a small state machine. Outside any
//! delimited section, `key: value` lines are declarations; between a start
//! and end marker, lines are collected verbatim as multi-line content.

use serde_json::Value;
use tracing::debug;

use crate::errors::{ScaffoldError, ScaffoldResult};
use crate::record::TestRecord;
use crate::template::{END_EXPECTED_OUTPUT, END_INPUT, START_EXPECTED_OUTPUT, START_INPUT};

/// A delimited multi-line block of the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Input,
    ExpectedOutput,
}

impl Section {
    fn start_marker(self) -> &'static str {
        match self {
            Section::Input => START_INPUT,
            Section::ExpectedOutput => START_EXPECTED_OUTPUT,
        }
    }

    fn end_marker(self) -> &'static str {
        match self {
            Section::Input => END_INPUT,
            Section::ExpectedOutput => END_EXPECTED_OUTPUT,
        }
    }

    fn opened_by(line: &str) -> Option<Self> {
        [Section::Input, Section::ExpectedOutput]
            .into_iter()
            .find(|section| section.start_marker() == line)
    }

    fn store(self, record: &mut TestRecord, text: String) {
        match self {
            Section::Input => record.input = Some(text),
            Section::ExpectedOutput => record.expected_output = Some(text),
        }
    }
}

/// Where the scanner currently is.
#[derive(Debug)]
enum Cursor<'a> {
    /// Between sections; `key: value` lines are declarations.
    Outside,
    /// Inside a delimited section, collecting its lines.
    Within {
        section: Section,
        lines: Vec<&'a str>,
    },
    /// A `context:` value that does not yet decode as JSON continues on the
    /// following lines.
    Context,
}

/// The result of scanning, before the context text is decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedContent {
    pub record: TestRecord,
    pub context_source: String,
}

/// Scans edited text into a record plus the raw context source.
pub fn scan(text: &str) -> ScannedContent {
    let mut record = TestRecord::default();
    let mut context_source = String::from("{}");
    let mut cursor = Cursor::Outside;

    for line in text.lines() {
        let stripped = line.trim();
        cursor = match cursor {
            Cursor::Outside => {
                if let Some(section) = Section::opened_by(stripped) {
                    Cursor::Within {
                        section,
                        lines: Vec::new(),
                    }
                } else if stripped.starts_with('#') {
                    Cursor::Outside
                } else {
                    declare(line, &mut record, &mut context_source)
                }
            }
            Cursor::Within { section, mut lines } => {
                if stripped == section.end_marker() {
                    section.store(&mut record, lines.join("\n").trim().to_string());
                    Cursor::Outside
                } else if stripped == section.start_marker() {
                    lines.clear();
                    Cursor::Within { section, lines }
                } else {
                    if !stripped.starts_with('#') {
                        lines.push(line);
                    }
                    Cursor::Within { section, lines }
                }
            }
            Cursor::Context => {
                if stripped.starts_with('#') {
                    Cursor::Context
                } else {
                    context_source.push('\n');
                    context_source.push_str(line);
                    if decodes(&context_source) {
                        Cursor::Outside
                    } else {
                        Cursor::Context
                    }
                }
            }
        };
    }

    if let Cursor::Within { section, .. } = cursor {
        debug!(?section, "section was never closed; its content is dropped");
    }

    ScannedContent {
        record,
        context_source,
    }
}

/// Parses edited text into a complete record, decoding the context as JSON.
pub fn parse(text: &str) -> ScaffoldResult<TestRecord> {
    let ScannedContent {
        mut record,
        context_source,
    } = scan(text);
    record.context = serde_json::from_str(&context_source)
        .map_err(|e| ScaffoldError::context_decode(&context_source, &e))?;
    debug!(name = ?record.name, extra = record.extra.len(), "parsed edited content");
    Ok(record)
}

/// Handles one non-comment line outside any section.
fn declare<'a>(line: &str, record: &mut TestRecord, context_source: &mut String) -> Cursor<'a> {
    let Some((key, value)) = line.split_once(':') else {
        return Cursor::Outside;
    };
    let key = key.trim();
    let value = value.trim();

    match key {
        "expectedOutputType" => {
            let kind = value.split('#').next().unwrap_or_default().trim();
            record.expected_output_type = Some(kind.to_string());
        }
        "context" => {
            *context_source = value.to_string();
            if !decodes(value) {
                return Cursor::Context;
            }
        }
        "name" => {
            if record.name.is_none() {
                record.name = Some(value.to_string());
            }
        }
        // Empty keys are dropped; section keys only come from their markers.
        "" | "input" | "expectedOutput" => {}
        _ => {
            if !record.extra.contains_key(key) {
                record
                    .extra
                    .insert(key.to_string(), Value::String(value.to_string()));
            }
        }
    }
    Cursor::Outside
}

fn decodes(text: &str) -> bool {
    serde_json::from_str::<Value>(text).is_ok()
}
