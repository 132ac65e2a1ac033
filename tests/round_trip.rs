// A record rendered into the editor template and parsed back unchanged must
// come out equal.

use pretty_assertions::assert_eq;
use serde_json::json;
use tokenscript_scaffold::{parser, template, TestRecord};

fn round_trip(record: &TestRecord) -> TestRecord {
    let text = template::render(Some(record));
    parser::parse(&text).unwrap()
}

fn assert_preserved(original: TestRecord) {
    let parsed = round_trip(&original);
    assert_eq!(parsed.input, original.input);
    assert_eq!(parsed.expected_output, original.expected_output);
    assert_eq!(parsed.expected_output_type, original.expected_output_type);
    assert_eq!(parsed.context, original.context);
}

#[test]
fn single_line_values() {
    assert_preserved(TestRecord {
        name: Some("Addition of two numbers".into()),
        input: Some("3 + 4".into()),
        expected_output: Some("7".into()),
        expected_output_type: Some("Number".into()),
        ..TestRecord::default()
    });
}

#[test]
fn multi_line_expression_with_inner_blank_line() {
    assert_preserved(TestRecord {
        name: Some("Block".into()),
        input: Some("variable x: Number = 1;\n\n  return x + {y};".into()),
        expected_output: Some("line one\nline two".into()),
        expected_output_type: Some("String".into()),
        context: json!({"y": 2}),
        ..TestRecord::default()
    });
}

#[test]
fn nested_context_values() {
    assert_preserved(TestRecord {
        name: Some("Context heavy".into()),
        input: Some("{a.b} + {c}".into()),
        expected_output: Some("3".into()),
        expected_output_type: Some("Number".into()),
        context: json!({
            "a": {"b": 1, "tags": ["x", "y: z", "# not a comment"]},
            "c": 2.5,
            "d": null,
            "e": "colon: inside"
        }),
        ..TestRecord::default()
    });
}

#[test]
fn values_containing_colons_and_hashes() {
    let original = TestRecord {
        name: Some("Ratio: 1:2".into()),
        input: Some("\"#ff0000\" : color".into()),
        expected_output: Some("rgb(255, 0, 0)".into()),
        expected_output_type: Some("Color".into()),
        ..TestRecord::default()
    };
    let parsed = round_trip(&original);
    assert_eq!(parsed.name, original.name);
    assert_preserved(original);
}

#[test]
fn passthrough_string_keys_survive() {
    let mut original = TestRecord {
        name: Some("With extras".into()),
        input: Some("1".into()),
        expected_output: Some("1".into()),
        expected_output_type: Some("Number".into()),
        ..TestRecord::default()
    };
    original.extra.insert("author".into(), json!("sam"));
    let parsed = round_trip(&original);
    assert_eq!(parsed.extra.get("author"), Some(&json!("sam")));
}

#[test]
fn rendered_template_is_a_fixed_point() {
    let record = round_trip(&TestRecord {
        name: Some("Fixed".into()),
        input: Some("a\nb".into()),
        expected_output: Some("c".into()),
        expected_output_type: Some("String".into()),
        context: json!({"k": [1, 2]}),
        ..TestRecord::default()
    });
    assert_eq!(round_trip(&record), record);
}
