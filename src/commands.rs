use std::sync::Arc;

use serde::Serialize;
use tauri::{command, State};

use crate::workflow::{PoemWorkflow, WorkflowState};

/// What the webview renders after a submission settles.
#[derive(Serialize)]
pub struct PoemView {
    pub topic: String,
    pub poem: String,
    pub source: &'static str,
}

/* ---------- 1.  MAIN PIPELINE ---------- */

#[command]
pub async fn generate_poem(
    topic: String,
    workflow: State<'_, Arc<PoemWorkflow>>,
) -> Result<PoemView, String> {
    let generated = workflow.submit(&topic).await.map_err(|e| e.to_string())?;
    Ok(PoemView {
        topic,
        poem: generated.text,
        source: generated.source.label(),
    })
}

/* ---------- 2.  SIDE ACTIONS ---------- */

#[command]
pub async fn copy_poem(workflow: State<'_, Arc<PoemWorkflow>>) -> Result<(), String> {
    workflow.copy_current_poem().await;
    Ok(())
}

#[command]
pub async fn current_state(
    workflow: State<'_, Arc<PoemWorkflow>>,
) -> Result<WorkflowState, String> {
    Ok(workflow.snapshot().await)
}
