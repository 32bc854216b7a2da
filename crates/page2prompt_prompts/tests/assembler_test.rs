//! Prompt assembly against a mock gateway.

use page2prompt_core::{PromptBundle, PromptSession, Shot, Style, Subject, SubjectKind};
use page2prompt_error::GatewayErrorKind;
use page2prompt_interface::{MockGateway, MockResponse, NoProgress};
use page2prompt_prompts::{PROMPT_ERROR_PREFIX, PromptAssembler, PromptContext, PromptOptions};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const THREE_PARAGRAPHS: &str = "\
Ann waits on the dock.

Ann waits on a foggy dock at night, lamps glowing behind her.

Ann, a weary detective, waits on a foggy wooden dock at night while harbor lamps glow.";

fn context() -> PromptContext {
    PromptContext::default().with_shot_description("Ann on the dock")
}

fn shot(scene: &str, description: &str) -> Shot {
    Shot {
        scene: scene.into(),
        shot: 1,
        description: description.into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_three_paragraphs_fill_bundle() {
    let mock = MockGateway::new_success(THREE_PARAGRAPHS);
    let assembler = PromptAssembler::new(mock.clone());

    let bundle = assembler
        .generate(&context(), &[], &PromptOptions::default())
        .await;

    assert_eq!(bundle.concise, "Ann waits on the dock.");
    assert!(bundle.normal.starts_with("Ann waits on a foggy dock"));
    assert!(bundle.detailed.starts_with("Ann, a weary detective"));
    assert_eq!(bundle.structured, THREE_PARAGRAPHS);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_single_paragraph_leaves_others_empty() {
    let assembler = PromptAssembler::new(MockGateway::new_success("Only one prompt here."));

    let bundle = assembler
        .generate(&context(), &[], &PromptOptions::default())
        .await;

    assert_eq!(bundle.concise, "Only one prompt here.");
    assert_eq!(bundle.normal, "");
    assert_eq!(bundle.detailed, "");
}

#[tokio::test]
async fn test_timeout_fills_every_field_with_error() {
    let assembler = PromptAssembler::new(MockGateway::new_delayed(
        Duration::from_secs(5),
        THREE_PARAGRAPHS,
    ))
    .with_timeout(Duration::from_millis(20));

    let bundle = assembler
        .generate(&context(), &[], &PromptOptions::default())
        .await;

    assert!(bundle.concise.starts_with(PROMPT_ERROR_PREFIX));
    assert!(bundle.concise.contains("timed out"));
    assert_eq!(bundle.concise, bundle.normal);
    assert_eq!(bundle.normal, bundle.detailed);
    assert_eq!(bundle.detailed, bundle.structured);
}

#[tokio::test]
async fn test_blank_middle_paragraph_stays_in_place() {
    let assembler =
        PromptAssembler::new(MockGateway::new_success("Short.\n\n\n\nLong detailed."));

    let bundle = assembler
        .generate(&context(), &[], &PromptOptions::default())
        .await;

    assert_eq!(bundle.concise, "Short.");
    assert_eq!(bundle.normal, "");
    assert_eq!(bundle.detailed, "Long detailed.");
}

#[tokio::test]
async fn test_gateway_error_fills_every_field_with_error() {
    let assembler = PromptAssembler::new(MockGateway::new_error(GatewayErrorKind::Api {
        status: 500,
        message: "upstream down".into(),
    }));

    let bundle = assembler
        .generate(&context(), &[], &PromptOptions::default())
        .await;

    assert_eq!(
        bundle.concise,
        format!("{}: API error 500: upstream down", PROMPT_ERROR_PREFIX)
    );
    assert!(!bundle.concise.contains(" at line "));
    assert_eq!(bundle.concise, bundle.structured);
}

#[tokio::test]
async fn test_empty_completion_leaves_every_field_empty() {
    let assembler = PromptAssembler::new(MockGateway::new_success("  \n\n "));

    let bundle = assembler
        .generate(&context(), &[], &PromptOptions::default())
        .await;

    assert_eq!(bundle, PromptBundle::default());
}

#[tokio::test]
async fn test_style_alias_and_end_parameters_applied() {
    let subjects = vec![
        Subject::new("Ann", "A detective", SubjectKind::Person).with_alias("ohwx woman"),
        Subject::new("Bob", "Her partner", SubjectKind::Person)
            .with_alias("tall man")
            .with_active(false),
    ];
    let options = PromptOptions::default()
        .with_style(Style::new("Noir", "A noir still of", "deep shadows"))
        .with_end_parameters(" --ar 16:9 ");
    let assembler = PromptAssembler::new(MockGateway::new_success("Ann greets Bob.\n\nAnn smiles."));

    let bundle = assembler.generate(&context(), &subjects, &options).await;

    assert_eq!(
        bundle.concise,
        "A noir still of ohwx woman greets Bob. deep shadows --ar 16:9"
    );
    assert_eq!(
        bundle.normal,
        "A noir still of ohwx woman smiles. deep shadows --ar 16:9"
    );
    assert_eq!(bundle.detailed, "");
}

#[tokio::test]
async fn test_bulk_records_session_and_reports_progress() {
    let mock = MockGateway::new_sequence(vec![
        MockResponse::Success("First.\n\nFirst, longer.\n\nFirst, longest.".into()),
        MockResponse::Error(GatewayErrorKind::Http("connection reset".into())),
        MockResponse::Success("Third.".into()),
    ]);
    let assembler = PromptAssembler::new(mock.clone());
    let shots = vec![shot("1", "a"), shot("1", "b"), shot("2", "c")];
    let mut session = PromptSession::default();
    let reports = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let reports = Arc::clone(&reports);
        move |fraction: f32| reports.lock().unwrap().push(fraction)
    };

    let bundles = assembler
        .generate_bulk(
            &shots,
            &[],
            &PromptOptions::default(),
            &mut session,
            &sink,
            &CancellationToken::new(),
        )
        .await;

    assert_eq!(bundles.len(), 3);
    assert_eq!(session.len(), 3);
    assert!(bundles[1].concise.starts_with(PROMPT_ERROR_PREFIX));
    assert_eq!(bundles[2].concise, "Third.");
    assert_eq!(
        session.flattened()[..3],
        ["First.", "First, longer.", "First, longest."]
    );

    let reports = reports.lock().unwrap();
    assert_eq!(reports.len(), 3);
    assert!((reports[2] - 1.0).abs() < f32::EPSILON);
    assert_eq!(mock.call_count(), 3);
}

#[tokio::test]
async fn test_bulk_sends_each_shot_size_people_and_places() {
    let mock = MockGateway::new_success(THREE_PARAGRAPHS);
    let assembler = PromptAssembler::new(mock.clone());
    let shots = vec![
        Shot {
            size: "Extreme Close-up".into(),
            people: "Ann".into(),
            places: "Harbor".into(),
            ..shot("1", "Ann's eyes")
        },
        Shot {
            size: "Wide".into(),
            people: "N/A".into(),
            places: "Street".into(),
            ..shot("2", "Empty street")
        },
    ];
    let mut session = PromptSession::default();

    assembler
        .generate_bulk(
            &shots,
            &[],
            &PromptOptions::default(),
            &mut session,
            &NoProgress,
            &CancellationToken::new(),
        )
        .await;

    let prompts = mock.rendered_prompts();
    assert!(prompts[0].contains("Size: Extreme Close-up"));
    assert!(prompts[0].contains("People: Ann"));
    assert!(prompts[0].contains("Places: Harbor"));
    assert!(prompts[1].contains("Size: Wide"));
    assert!(!prompts[1].contains("People:"));
    assert!(prompts[1].contains("Places: Street"));
}

#[tokio::test]
async fn test_bulk_cancelled_before_start_makes_no_calls() {
    let mock = MockGateway::new_success(THREE_PARAGRAPHS);
    let assembler = PromptAssembler::new(mock.clone());
    let cancel = CancellationToken::new();
    cancel.cancel();
    let mut session = PromptSession::default();

    let bundles = assembler
        .generate_bulk(
            &[shot("1", "a"), shot("2", "b")],
            &[],
            &PromptOptions::default(),
            &mut session,
            &NoProgress,
            &cancel,
        )
        .await;

    assert!(bundles.is_empty());
    assert!(session.is_empty());
    assert_eq!(mock.call_count(), 0);
}
