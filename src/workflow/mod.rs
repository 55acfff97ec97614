//! The generate-with-fallback workflow: topic in, poem out, always.
//!
//! A submission prefers the remote generation service and degrades to the
//! curated anthology - or an improvised template - on any failure. Generation
//! problems are logged, never shown to the user; the only user-facing error
//! is an empty topic.
//!
//! Per submission the state machine is
//! `Idle -> Submitting -> {Resolved-Remote | Resolved-Fallback} -> Idle`,
//! entered only from `Idle`: a blank topic is rejected at the boundary and a
//! second submission while one is in flight is refused.

mod state;
#[cfg(test)]
mod tests;

pub use state::{GeneratedPoem, PoemSource, WorkflowState};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::fallback;
use crate::generation::{prompt, GenerationService};
use crate::surface::{ClipboardSink, NotificationSink};

/// Shown when the user submits a blank topic.
pub const EMPTY_TOPIC_MESSAGE: &str = "Por favor, insira um tema para o poema";

/// Shown after the poem is handed to the clipboard sink.
pub const POEM_COPIED_MESSAGE: &str = "Poema copiado para a área de transferência";

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("topic required")]
    EmptyTopic,

    #[error("a submission is already in flight")]
    RequestInFlight,
}

pub struct PoemWorkflow {
    generator: Arc<dyn GenerationService>,
    notifier: Arc<dyn NotificationSink>,
    clipboard: Arc<dyn ClipboardSink>,
    fallback_delay: Duration,
    state: RwLock<WorkflowState>,
    in_flight: AtomicBool,
}

impl PoemWorkflow {
    pub fn new(
        generator: Arc<dyn GenerationService>,
        notifier: Arc<dyn NotificationSink>,
        clipboard: Arc<dyn ClipboardSink>,
        config: &Config,
    ) -> Self {
        Self {
            generator,
            notifier,
            clipboard,
            fallback_delay: config.fallback_delay,
            state: RwLock::new(WorkflowState::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Current `{topic, poem, isLoading}` as the surface renders it.
    pub async fn snapshot(&self) -> WorkflowState {
        self.state.read().await.clone()
    }

    /// Resolves `topic` into a poem.
    ///
    /// A blank topic is refused with a notification and no request is made.
    /// Otherwise the previous poem is cleared, the loading flag raised, and
    /// the topic resolved remotely or through the fallback path; the poem and
    /// the loading flag are published together once the value is known.
    pub async fn submit(&self, topic: &str) -> Result<GeneratedPoem, WorkflowError> {
        if topic.trim().is_empty() {
            self.notifier.notify_error(EMPTY_TOPIC_MESSAGE);
            return Err(WorkflowError::EmptyTopic);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!(topic, "submission refused: another request is in flight");
            return Err(WorkflowError::RequestInFlight);
        }

        let request_id = Uuid::new_v4();
        {
            let mut state = self.state.write().await;
            state.topic = topic.to_string();
            state.poem.clear();
            state.is_loading = true;
        }

        let generated = self.resolve(request_id, topic).await;

        {
            let mut state = self.state.write().await;
            state.poem = generated.text.clone();
            state.is_loading = false;
        }
        self.in_flight.store(false, Ordering::Release);

        info!(%request_id, source = generated.source.label(), "poem ready");
        Ok(generated)
    }

    async fn resolve(&self, request_id: Uuid, topic: &str) -> GeneratedPoem {
        let prompt = prompt::poem_prompt(topic);

        match self.generator.generate(&prompt).await {
            Ok(text) => GeneratedPoem {
                text,
                source: PoemSource::Remote,
            },
            Err(err) => {
                warn!(%request_id, error = %err, "remote generation failed, serving fallback");

                let (text, source) = match fallback::lookup(topic) {
                    Some(poem) => (poem.to_string(), PoemSource::Curated),
                    None => (fallback::improvise(topic), PoemSource::Improvised),
                };

                // Keeps the "processing" feel the remote path has.
                if !self.fallback_delay.is_zero() {
                    tokio::time::sleep(self.fallback_delay).await;
                }

                GeneratedPoem { text, source }
            }
        }
    }

    /// Hands the poem on display to the clipboard sink. The success toast is
    /// unconditional; a sink failure is logged and swallowed.
    pub async fn copy_current_poem(&self) {
        let poem = self.state.read().await.poem.clone();

        if let Err(err) = self.clipboard.write_text(&poem) {
            warn!(error = %err, "clipboard sink rejected the poem");
        }
        self.notifier.notify_success(POEM_COPIED_MESSAGE);
    }
}
