//! Workflow behavior tests against scripted service and sink fakes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use super::*;
use crate::config::Config;
use crate::fallback;
use crate::generation::{GenerationError, GenerationService};
use crate::surface::{ClipboardSink, NotificationSink};

enum Script {
    Succeed(String),
    Fail,
}

struct FakeGenerator {
    script: Script,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

#[async_trait]
impl GenerationService for FakeGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.script {
            Script::Succeed(text) => Ok(text.clone()),
            Script::Fail => Err(GenerationError::EmptyContent),
        }
    }
}

#[derive(Default)]
struct RecordingNotifier {
    errors: Mutex<Vec<String>>,
    successes: Mutex<Vec<String>>,
}

impl NotificationSink for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn notify_success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
struct RecordingClipboard {
    texts: Mutex<Vec<String>>,
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct Harness {
    workflow: Arc<PoemWorkflow>,
    generator: Arc<FakeGenerator>,
    notifier: Arc<RecordingNotifier>,
    clipboard: Arc<RecordingClipboard>,
}

fn test_config() -> Config {
    Config {
        fallback_delay: Duration::ZERO,
        ..Config::default()
    }
}

fn harness(script: Script) -> Harness {
    harness_with_gate(script, None)
}

fn harness_with_gate(script: Script, gate: Option<Arc<Notify>>) -> Harness {
    let generator = Arc::new(FakeGenerator {
        script,
        calls: AtomicUsize::new(0),
        gate,
    });
    let notifier = Arc::new(RecordingNotifier::default());
    let clipboard = Arc::new(RecordingClipboard::default());
    let workflow = Arc::new(PoemWorkflow::new(
        generator.clone(),
        notifier.clone(),
        clipboard.clone(),
        &test_config(),
    ));
    Harness {
        workflow,
        generator,
        notifier,
        clipboard,
    }
}

async fn wait_for_call(generator: &FakeGenerator) {
    for _ in 0..200 {
        if generator.calls.load(Ordering::SeqCst) > 0 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("generator was never called");
}

#[tokio::test]
async fn blank_topic_never_reaches_the_service() {
    let h = harness(Script::Succeed("inalcançável".into()));

    let result = h.workflow.submit("   ").await;

    assert!(matches!(result, Err(WorkflowError::EmptyTopic)));
    assert_eq!(h.generator.calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        *h.notifier.errors.lock().unwrap(),
        vec![EMPTY_TOPIC_MESSAGE.to_string()]
    );

    let state = h.workflow.snapshot().await;
    assert!(!state.is_loading);
    assert!(state.poem.is_empty());
}

#[tokio::test]
async fn remote_text_wins_over_a_curated_entry() {
    let h = harness(Script::Succeed("X".into()));

    let generated = h.workflow.submit("amor").await.unwrap();

    assert_eq!(generated.text, "X");
    assert_eq!(generated.source, PoemSource::Remote);
    assert_eq!(h.workflow.snapshot().await.poem, "X");
}

#[tokio::test]
async fn curated_fallback_matches_case_insensitively() {
    let upper = harness(Script::Fail);
    let lower = harness(Script::Fail);

    let from_upper = upper.workflow.submit("AMOR").await.unwrap();
    let from_lower = lower.workflow.submit("amor").await.unwrap();

    assert_eq!(from_upper.source, PoemSource::Curated);
    assert_eq!(from_upper.text, from_lower.text);
    assert_eq!(from_upper.text, fallback::lookup("amor").unwrap());
    // generation failures never surface as user-facing errors
    assert!(upper.notifier.errors.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_topic_improvises_around_the_literal_topic() {
    let h = harness(Script::Fail);

    let generated = h.workflow.submit("galáxias").await.unwrap();

    assert_eq!(generated.source, PoemSource::Improvised);
    assert!(generated.text.matches("galáxias").count() >= 2);
    assert!(!generated.text.is_empty());
}

#[tokio::test]
async fn resubmission_replaces_the_previous_poem() {
    let h = harness(Script::Fail);

    h.workflow.submit("amor").await.unwrap();
    h.workflow.submit("vida").await.unwrap();

    let state = h.workflow.snapshot().await;
    assert_eq!(state.topic, "vida");
    assert_eq!(state.poem, fallback::lookup("vida").unwrap());
}

#[tokio::test]
async fn copy_hands_the_current_poem_to_the_clipboard() {
    let h = harness(Script::Succeed("Verso único".into()));

    h.workflow.submit("mar").await.unwrap();
    h.workflow.copy_current_poem().await;

    assert_eq!(
        *h.clipboard.texts.lock().unwrap(),
        vec!["Verso único".to_string()]
    );
    assert_eq!(
        *h.notifier.successes.lock().unwrap(),
        vec![POEM_COPIED_MESSAGE.to_string()]
    );
}

#[tokio::test]
async fn concurrent_submission_is_refused() {
    let gate = Arc::new(Notify::new());
    let h = harness_with_gate(Script::Succeed("lento".into()), Some(gate.clone()));

    let workflow = h.workflow.clone();
    let first = tokio::spawn(async move { workflow.submit("amor").await });
    wait_for_call(&h.generator).await;

    let second = h.workflow.submit("vida").await;
    assert!(matches!(second, Err(WorkflowError::RequestInFlight)));

    gate.notify_one();
    let generated = first.await.unwrap().unwrap();
    assert_eq!(generated.text, "lento");

    // the in-flight submission stayed authoritative
    let state = h.workflow.snapshot().await;
    assert_eq!(state.topic, "amor");
    assert_eq!(state.poem, "lento");
}

#[tokio::test]
async fn loading_holds_until_the_poem_is_published() {
    let gate = Arc::new(Notify::new());
    let h = harness_with_gate(Script::Fail, Some(gate.clone()));

    let workflow = h.workflow.clone();
    let pending = tokio::spawn(async move { workflow.submit("amor").await });
    wait_for_call(&h.generator).await;

    let mid_flight = h.workflow.snapshot().await;
    assert!(mid_flight.is_loading);
    assert!(mid_flight.poem.is_empty());

    gate.notify_one();
    pending.await.unwrap().unwrap();

    let settled = h.workflow.snapshot().await;
    assert!(!settled.is_loading);
    assert!(!settled.poem.is_empty());
}
