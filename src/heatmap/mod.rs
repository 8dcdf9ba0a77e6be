//! Workload heatmap
//!
//! A bar per calendar day, coloured by how many sub-tasks land on it, so the
//! crunch weeks of a semester stand out at a glance.

pub mod load;
pub mod render;

pub use load::{daily_load, peak, DailyLoad};

use image::ImageFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::syllabus::SubTask;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write heatmap to {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Renders a plan's per-day load somewhere the user can look at it
pub trait WorkloadRenderer {
    /// Returns where the image went, or `None` when there was nothing to draw
    fn render(&self, subtasks: &[SubTask]) -> Result<Option<PathBuf>, RenderError>;
}

/// Writes the heatmap as a PNG at a fixed path
#[derive(Debug, Clone)]
pub struct PngHeatmap {
    path: PathBuf,
}

impl PngHeatmap {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorkloadRenderer for PngHeatmap {
    fn render(&self, subtasks: &[SubTask]) -> Result<Option<PathBuf>, RenderError> {
        if subtasks.is_empty() {
            info!("No tasks to plot, skipping heatmap");
            return Ok(None);
        }

        let loads = daily_load(subtasks);
        let img = render::draw(&loads);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        // always PNG, whatever the extension says
        img.save_with_format(&self.path, ImageFormat::Png)
            .map_err(|source| RenderError::Image {
                path: self.path.clone(),
                source,
            })?;

        info!(
            "Wrote heatmap for {} days (peak {}) to {}",
            loads.len(),
            peak(&loads),
            self.path.display()
        );
        Ok(Some(self.path.clone()))
    }
}
