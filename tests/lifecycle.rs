//! Request lifecycle — one state machine per section, exercised end to
//! end with the credential-less demo client (no network).

use nexus_gen::genai::{demo, GeminiClient, GenerationError, GenerationResult};
use nexus_gen::prompt::Category;
use nexus_gen::workspace::{PromptSection, RequestState, TriggerOutcome, Workspace};

#[test]
fn new_workspace_is_idle_everywhere() {
    let workspace = Workspace::new();
    for category in Category::ALL {
        assert_eq!(workspace.section(category).state(), RequestState::Idle);
        assert_eq!(workspace.section(category).category(), category);
    }
}

#[tokio::test]
async fn blank_input_is_a_no_op_for_every_category() {
    let client = GeminiClient::demo();
    let workspace = Workspace::new();
    for category in Category::ALL {
        for input in ["", "   ", "\n\t "] {
            let outcome = workspace.section(category).trigger(&client, input).await;
            assert_eq!(outcome, TriggerOutcome::SkippedEmptyInput);
            assert_eq!(workspace.section(category).state(), RequestState::Idle);
        }
    }
}

#[test]
fn second_trigger_while_pending_starts_nothing() {
    let section = PromptSection::new(Category::Description);

    let first = section.begin("Wireless earbuds, 30h battery");
    assert!(first.is_some());
    assert_eq!(section.state(), RequestState::Pending);

    // The racing trigger must not compose a second request.
    assert_eq!(section.begin("another input"), None);
    assert_eq!(section.state(), RequestState::Pending);

    section.settle(Ok(GenerationResult::Text("done".into())));
    assert_eq!(
        section.state(),
        RequestState::Succeeded {
            result: GenerationResult::Text("done".into())
        }
    );
}

#[tokio::test]
async fn pending_section_ignores_trigger() {
    let client = GeminiClient::demo();
    let section = PromptSection::new(Category::AdCopy);
    section.begin("reference copy").expect("first trigger starts");

    let outcome = section.trigger(&client, "reference copy").await;
    assert_eq!(outcome, TriggerOutcome::SkippedInFlight);
    assert_eq!(section.state(), RequestState::Pending);
}

#[tokio::test]
async fn demo_text_generation_succeeds_with_marker() {
    let client = GeminiClient::demo();
    assert!(client.is_demo());

    let section = PromptSection::new(Category::Description);
    let outcome = section
        .trigger(&client, "Wireless earbuds, 30h battery")
        .await;
    assert_eq!(outcome, TriggerOutcome::Settled);

    match section.state() {
        RequestState::Succeeded {
            result: GenerationResult::Text(text),
        } => {
            assert!(text.contains(demo::DEMO_MARKER), "demo output must be labeled");
            // The echo starts at the head of the composed prompt.
            assert!(text.contains("Analyze the following reference product description"));
        }
        other => panic!("expected demo text result, got {other:?}"),
    }
}

#[tokio::test]
async fn demo_image_generation_returns_fixed_placeholder() {
    let client = GeminiClient::demo();
    let section = PromptSection::new(Category::Photo);

    let outcome = section.trigger(&client, "a ceramic mug").await;
    assert_eq!(outcome, TriggerOutcome::Settled);

    match section.state() {
        RequestState::Succeeded {
            result: GenerationResult::Image(uri),
        } => {
            assert!(uri.starts_with("data:image/"));
            assert_eq!(uri, demo::demo_image_uri(), "placeholder must be the fixed reference");
        }
        other => panic!("expected demo image result, got {other:?}"),
    }
}

#[test]
fn failure_keeps_the_error_text_and_machine_recovers() {
    let section = PromptSection::new(Category::Photo);
    section.begin("a mug").unwrap();
    section.settle(Err(GenerationError::NoImageData));

    assert_eq!(
        section.state(),
        RequestState::Failed {
            message: GenerationError::NoImageData.to_string()
        }
    );

    // Not stuck in pending — the user can re-trigger after a failure.
    assert!(section.begin("a mug").is_some());
    assert_eq!(section.state(), RequestState::Pending);
}

#[test]
fn transport_message_is_surfaced_verbatim() {
    let section = PromptSection::new(Category::AdCopy);
    section.begin("reference").unwrap();
    section.settle(Err(GenerationError::Transport("API error (503)".into())));

    assert_eq!(
        section.state(),
        RequestState::Failed {
            message: "API error (503)".into()
        }
    );
}

#[test]
fn sections_are_independent() {
    let workspace = Workspace::new();

    workspace.section(Category::Photo).begin("a mug").unwrap();
    assert_eq!(workspace.section(Category::Photo).state(), RequestState::Pending);

    // A pending photo does not block the other sections.
    assert!(workspace.section(Category::Description).begin("earbuds").is_some());
    assert_eq!(
        workspace.section(Category::Description).state(),
        RequestState::Pending
    );
    assert_eq!(workspace.section(Category::AdCopy).state(), RequestState::Idle);
}

#[test]
fn reset_returns_to_idle() {
    let section = PromptSection::new(Category::Description);
    section.begin("earbuds").unwrap();
    section.settle(Ok(GenerationResult::Text("copy".into())));

    section.reset();
    assert_eq!(section.state(), RequestState::Idle);
}

#[test]
fn workspace_exposes_one_section_per_category() {
    let workspace = Workspace::default();
    let categories: Vec<Category> = workspace.sections().map(|s| s.category()).collect();
    assert_eq!(categories, Category::ALL);
}

#[test]
fn request_state_serializes_for_the_frontend() {
    let state = RequestState::Succeeded {
        result: GenerationResult::Text("hello".into()),
    };
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["status"], "succeeded");
    assert_eq!(json["result"]["kind"], "text");
    assert_eq!(json["result"]["value"], "hello");
}
