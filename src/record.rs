//! The test record: one TokenScript compliance test case as stored on disk.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::errors::{ScaffoldError, ScaffoldResult};

/// Misspelled spelling of `expectedOutputType` found in older test files.
pub const LEGACY_OUTPUT_TYPE_KEY: &str = "exceptedOutputType";

/// A single compliance test case.
///
/// Known keys are typed fields; anything else read from disk or typed as a
/// stray `key: value` line lands in `extra` and is written back verbatim
/// after the known keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    #[serde(
        default,
        deserialize_with = "text_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub input: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected_output: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected_output_type: Option<String>,
    #[serde(default = "empty_context")]
    pub context: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accepts any JSON value for a text field; non-strings become their JSON text.
fn text_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(value_text(&other)),
    })
}

fn empty_context() -> Value {
    Value::Object(Map::new())
}

impl Default for TestRecord {
    fn default() -> Self {
        Self {
            name: None,
            input: None,
            expected_output: None,
            expected_output_type: None,
            context: empty_context(),
            extra: Map::new(),
        }
    }
}

impl TestRecord {
    /// Reads and decodes an existing test file.
    pub fn load(path: &Path) -> ScaffoldResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ScaffoldError::ExistingFileRead {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        serde_json::from_str(&text).map_err(|e| ScaffoldError::ExistingFileRead {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }

    /// The output type to show when editing, falling back to the legacy key.
    pub fn output_type(&self) -> Option<String> {
        if let Some(kind) = &self.expected_output_type {
            return Some(kind.clone());
        }
        self.extra.get(LEGACY_OUTPUT_TYPE_KEY).map(value_text)
    }

    /// Folds the legacy output-type key into the canonical field.
    ///
    /// When both are present the canonical value is kept and the legacy key
    /// is dropped.
    pub fn normalize(&mut self) {
        let Some(legacy) = self.extra.shift_remove(LEGACY_OUTPUT_TYPE_KEY) else {
            return;
        };
        if self.expected_output_type.is_none() {
            self.expected_output_type = Some(value_text(&legacy));
        }
    }

    /// Serializes the record with 4-space indentation.
    pub fn to_json(&self) -> ScaffoldResult<String> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)
            .map_err(|source| ScaffoldError::Serialize { source })?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Renders a JSON value as plain text, without quotes for strings.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
