//! Serialization and session behavior of the core records.

use page2prompt_core::{
    CameraSettings, Project, PromptBundle, PromptLength, PromptSession, Shot, Subject, SubjectKind,
};

#[test]
fn test_subject_serializes_kind_lowercase() {
    let dock = Subject::new("Dock", "A rotting pier", SubjectKind::Place);
    let json = serde_json::to_value(&dock).unwrap();
    assert_eq!(json["kind"], "place");
    assert_eq!(json["alias"], "Dock");
}

#[test]
fn test_shot_without_notes_deserializes() {
    let json = r#"{
        "timestamp": "00:00:01",
        "scene": "1",
        "shot": 2,
        "reference": "Ann waits.",
        "description": "Ann at the rail",
        "size": "Wide",
        "people": "Ann",
        "places": "Dock"
    }"#;
    let shot: Shot = serde_json::from_str(json).unwrap();
    assert_eq!(shot.directors_notes, None);
    assert_eq!(shot.people_names(), vec!["Ann"]);
}

#[test]
fn test_session_flattens_in_order_and_skips_empty() {
    let mut session = PromptSession::default();
    session.record(PromptBundle {
        concise: "one".into(),
        normal: "two".into(),
        detailed: String::new(),
        structured: "raw".into(),
    });
    session.record(PromptBundle::uniform("three"));

    assert_eq!(session.len(), 2);
    assert_eq!(
        session.flattened(),
        vec!["one", "two", "three", "three", "three"]
    );

    session.clear();
    assert!(session.is_empty());
}

#[test]
fn test_bundle_lookup_by_length() {
    let bundle = PromptBundle {
        concise: "c".into(),
        normal: "n".into(),
        detailed: "d".into(),
        structured: "s".into(),
    };
    assert_eq!(bundle.get(PromptLength::Normal), "n");
    assert_eq!(PromptLength::Detailed.target_words(), 100);
    assert_eq!(PromptLength::Concise.to_string(), "concise");
}

#[test]
fn test_project_round_trips_through_json() {
    let mut project = Project::new("pilot", "INT. DOCK - NIGHT");
    project.subjects.push(Subject::new("Ann", "A detective", SubjectKind::Person));
    project.prompts.push("Ann at the rail".into());

    let json = serde_json::to_string_pretty(&project).unwrap();
    let back: Project = serde_json::from_str(&json).unwrap();
    assert_eq!(back, project);
}

#[test]
fn test_camera_settings_move_field_renamed() {
    let settings = CameraSettings::builder()
        .camera_move("Dolly in")
        .build()
        .unwrap();
    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["move"], "Dolly in");
}
