//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::syllabus::SubStepSequence;
use crate::todoist::DEFAULT_API_URL;

/// Overrides the config directory (mostly for tests and CI)
pub const CONFIG_DIR_ENV: &str = "CLASSRADAR_CONFIG_DIR";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub todoist: TodoistConfig,

    #[serde(default)]
    pub heatmap: HeatmapConfig,

    #[serde(default)]
    pub plan: PlanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoistConfig {
    /// Personal API token; tasks are only pushed when one is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for TodoistConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: default_api_url(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_heatmap_path")]
    pub path: PathBuf,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_heatmap_path(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_heatmap_path() -> PathBuf {
    PathBuf::from("static").join("heatmap.png")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default)]
    pub sub_steps: SubStepSequence,
}

pub fn get_config_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::config_dir()
            .context("Could not find config directory")?
            .join("classradar"),
    };

    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;
    }
    Ok(dir)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}

impl Config {
    /// Load the config file, falling back to defaults when there is none
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {:?}", path))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Invalid config at {:?}", path))?;
    Ok(Some(config))
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content).with_context(|| format!("Failed to write to {:?}", path))?;
    Ok(())
}
