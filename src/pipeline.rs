//! Syllabus-to-plan pipeline
//!
//! document bytes -> text -> assignments -> sub-tasks, then the heatmap and the
//! Todoist push as side effects. Collaborators are injected so tests can record
//! calls instead of touching the network or disk.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Config;
use crate::extract::{AutoExtractor, TextExtractor};
use crate::heatmap::{PngHeatmap, WorkloadRenderer};
use crate::syllabus::{decompose_all, extract_tasks, SubStepSequence, SubTask};
use crate::todoist::{push_all, TaskPusher, TodoistClient};

/// Everything a pipeline run needs to know, passed explicitly
#[derive(Debug, Clone)]
pub struct RadarConfig {
    pub sub_steps: SubStepSequence,

    /// Where to write the heatmap; `None` disables it
    pub heatmap_path: Option<PathBuf>,

    /// Todoist token; `None` disables the push
    pub todoist_token: Option<String>,

    pub todoist_api_url: String,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl RadarConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            sub_steps: config.plan.sub_steps.clone(),
            heatmap_path: config
                .heatmap
                .enabled
                .then(|| config.heatmap.path.clone()),
            todoist_token: config
                .todoist
                .token
                .clone()
                .filter(|t| !t.trim().is_empty()),
            todoist_api_url: config.todoist.api_url.clone(),
        }
    }
}

/// The pipeline's external capabilities
pub struct Collaborators<E, R, P> {
    pub extractor: E,
    pub renderer: Option<R>,
    pub pusher: Option<P>,
}

/// The real collaborators: PDF/text extraction, PNG heatmap, Todoist
pub type DefaultCollaborators = Collaborators<AutoExtractor, PngHeatmap, TodoistClient>;

impl DefaultCollaborators {
    pub fn from_config(config: &RadarConfig) -> Result<Self> {
        let pusher = match &config.todoist_token {
            Some(token) => Some(
                TodoistClient::with_api_url(token.as_str(), config.todoist_api_url.as_str())
                    .context("Failed to build Todoist client")?,
            ),
            None => None,
        };

        Ok(Self {
            extractor: AutoExtractor,
            renderer: config.heatmap_path.as_ref().map(PngHeatmap::new),
            pusher,
        })
    }
}

/// Run the whole pipeline over one document.
///
/// Returns the concatenated sub-tasks of every assignment found. When the
/// document has no deadlines the result is empty and neither the heatmap nor
/// the push runs.
pub async fn process<E, R, P>(
    document: &[u8],
    config: &RadarConfig,
    collaborators: &Collaborators<E, R, P>,
) -> Result<Vec<SubTask>>
where
    E: TextExtractor,
    R: WorkloadRenderer,
    P: TaskPusher,
{
    let text = collaborators
        .extractor
        .extract_text(document)
        .context("Failed to extract text from document")?;

    let assignments = extract_tasks(&text);
    if assignments.is_empty() {
        info!("No deadlines found in document");
        return Ok(Vec::new());
    }
    info!("Found {} deadlines", assignments.len());

    let subtasks = decompose_all(&assignments, &config.sub_steps);

    if let Some(renderer) = &collaborators.renderer {
        renderer
            .render(&subtasks)
            .context("Failed to render workload heatmap")?;
    }

    match &collaborators.pusher {
        Some(pusher) => {
            let summary = push_all(pusher, &subtasks).await;
            info!(
                "Pushed {} tasks to Todoist ({} failed)",
                summary.sent, summary.failed
            );
        }
        None => warn!("No Todoist token configured, skipping push"),
    }

    Ok(subtasks)
}

/// [`process`] over a document on disk
pub async fn process_file<E, R, P>(
    path: &Path,
    config: &RadarConfig,
    collaborators: &Collaborators<E, R, P>,
) -> Result<Vec<SubTask>>
where
    E: TextExtractor,
    R: WorkloadRenderer,
    P: TaskPusher,
{
    let document =
        std::fs::read(path).with_context(|| format!("Failed to read document {:?}", path))?;
    process(&document, config, collaborators).await
}
