//! Behavior of the completion-text parsers on realistic responses.

use page2prompt_codec::{
    SHOT_FIELDS, parse_name_description_lines, parse_pipe_rows, parse_subjects_json,
    split_paragraphs,
};
use page2prompt_core::SubjectKind;

const SHOT_LIST: &str = "\
00:00:01|1|1|\"INT. DOCK - NIGHT\"|Wide view of the dock|Wide|N/A|Dock
00:00:05|1|2|\"Ann waits.\"|Ann at the rail|Medium|Ann|Dock
Here is your shot list:
00:00:09|2|1|\"EXT. STREET - DAY\"|Bob crosses|Wide|Bob|Street

00:00:12|2|2|too|few|fields
";

#[test]
fn test_well_formed_rows_survive_malformed_ones() {
    let report = parse_pipe_rows(SHOT_LIST, &SHOT_FIELDS);
    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.dropped, 2);
}

#[test]
fn test_shot_rows_are_positional() {
    let report = parse_pipe_rows(SHOT_LIST, &SHOT_FIELDS);
    let bob = &report.rows[2];
    assert_eq!(bob.get("timestamp"), "00:00:09");
    assert_eq!(bob.get("scene"), "2");
    assert_eq!(bob.get("description"), "Bob crosses");
    assert_eq!(bob.get("places"), "Street");
}

#[test]
fn test_n_good_m_bad_lines() {
    let good = (0..5).map(|i| format!("{i}|a|b")).collect::<Vec<_>>();
    let bad = ["x|y", "x|y|z|w", "plain"];
    let text = good
        .iter()
        .map(String::as_str)
        .chain(bad)
        .collect::<Vec<_>>()
        .join("\n");

    let report = parse_pipe_rows(&text, &["n", "a", "b"]);
    assert_eq!(report.rows.len(), 5);
    assert_eq!(report.dropped, 3);
}

#[test]
fn test_subjects_json_in_fence_with_bad_rows() {
    let text = r#"Extracted:
```json
{"subjects": [
  {"name": "Ann", "description": "A tired detective", "type": "Person"},
  {"name": "Dock", "description": "Rotting pier", "type": "place"},
  {"name": "Lamp", "description": "Brass lamp", "type": "vehicle"},
  {"description": "no name", "type": "prop"}
]}
```"#;

    let report = parse_subjects_json(text).unwrap();
    assert_eq!(report.dropped, 2);
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].kind, SubjectKind::Person);
    assert_eq!(report.rows[1].kind, SubjectKind::Place);
    assert!(report.rows.iter().all(|s| s.active));
}

#[test]
fn test_subjects_json_absent_is_error() {
    assert!(parse_subjects_json("Ann: detective").is_err());
    assert!(parse_subjects_json("{\"other\": 1}").is_err());
}

#[test]
fn test_line_form_defaults_to_person() {
    let report = parse_name_description_lines("Ann: A detective\n* Bob: Her partner\n\n: nameless");
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.dropped, 1);
    assert!(report.rows.iter().all(|s| s.kind == SubjectKind::Person));
    assert_eq!(report.rows[1].description, "Her partner");
}

#[test]
fn test_short_prompt_response_has_fewer_paragraphs() {
    let parts = split_paragraphs("Only one paragraph here.");
    assert_eq!(parts.len(), 1);
    assert_eq!(parts.get(1), None);
}
