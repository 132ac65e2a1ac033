//! Builds the editable text shown to the user in their editor.

use std::fmt::Write as _;

use serde_json::Value;

use crate::record::{TestRecord, LEGACY_OUTPUT_TYPE_KEY};

pub const START_INPUT: &str = "# START_INPUT";
pub const END_INPUT: &str = "# END_INPUT";
pub const START_EXPECTED_OUTPUT: &str = "# START_EXPECTED_OUTPUT";
pub const END_EXPECTED_OUTPUT: &str = "# END_EXPECTED_OUTPUT";

const NAME_PLACEHOLDER: &str = "Test name here";
const INPUT_PLACEHOLDER: &str = "Your TokenScript expression here";
const OUTPUT_PLACEHOLDER: &str = "Expected result here";
const OUTPUT_TYPE_HINT: &str = "# or String, Boolean, etc.";

const HEADER: &str = "\
# Edit the test details below. Lines starting with # will be ignored.
# Save and close the editor when done.
";

const INPUT_HELP: &str = "\
# For input expression, write it between the START and END markers below
# You can use multiple lines for complex TokenScript expressions
";

const OUTPUT_HELP: &str = "\
# For expected output, write it between the START and END markers below
";

const NEW_CONTEXT_HELP: &str = "\
# Context (variables) section - use JSON format
# Remove the {} and add your context variables if needed, e.g.:
# {
#   \"x\": 3,
#   \"y\": \"hello\"
# }
";

const EDIT_CONTEXT_HELP: &str = "# Context (variables) section - use JSON format\n";

/// Renders the editor template, blank or pre-filled from `record`.
pub fn render(record: Option<&TestRecord>) -> String {
    match record {
        None => render_blank(),
        Some(record) => render_existing(record),
    }
}

fn render_blank() -> String {
    let mut out = String::new();
    write_body(
        &mut out,
        NAME_PLACEHOLDER,
        INPUT_PLACEHOLDER,
        OUTPUT_PLACEHOLDER,
        "Number",
    );
    out.push('\n');
    out.push_str(NEW_CONTEXT_HELP);
    out.push_str("context: {}\n");
    out
}

fn render_existing(record: &TestRecord) -> String {
    let output_type = record.output_type().unwrap_or_default();
    let mut out = String::new();
    write_body(
        &mut out,
        record.name.as_deref().unwrap_or(NAME_PLACEHOLDER),
        record.input.as_deref().unwrap_or(INPUT_PLACEHOLDER),
        record.expected_output.as_deref().unwrap_or(OUTPUT_PLACEHOLDER),
        &output_type,
    );

    let extras = passthrough_lines(record);
    if !extras.is_empty() {
        out.push_str("\n# Additional fields\n");
        out.push_str(&extras);
    }

    let context = serde_json::to_string_pretty(&record.context).unwrap_or_else(|_| "{}".into());
    out.push('\n');
    out.push_str(EDIT_CONTEXT_HELP);
    let _ = writeln!(out, "context: {context}");
    out
}

fn write_body(out: &mut String, name: &str, input: &str, output: &str, output_type: &str) {
    out.push_str(HEADER);
    let _ = writeln!(out, "\nname: {name}\n");
    out.push_str(INPUT_HELP);
    let _ = writeln!(out, "{START_INPUT}\n{input}\n{END_INPUT}\n");
    out.push_str(OUTPUT_HELP);
    let _ = writeln!(out, "{START_EXPECTED_OUTPUT}\n{output}\n{END_EXPECTED_OUTPUT}\n");
    let _ = writeln!(out, "expectedOutputType: {output_type} {OUTPUT_TYPE_HINT}");
}

/// Single-line string passthrough keys, one `key: value` line each.
fn passthrough_lines(record: &TestRecord) -> String {
    let mut lines = String::new();
    for (key, value) in &record.extra {
        if key == LEGACY_OUTPUT_TYPE_KEY || key.contains(':') || key.trim() != key {
            continue;
        }
        let Value::String(text) = value else { continue };
        if text.contains('\n') {
            continue;
        }
        let _ = writeln!(lines, "{key}: {text}");
    }
    lines
}
