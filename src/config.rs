use serde::{Deserialize, Serialize};
use std::path::Path;
use anyhow::Result;

use crate::protocol::VarKind;

pub const DEFAULT_CONFIG_FILE: &str = "varlen.toml";
pub const DEFAULT_LOG_FILTER: &str = "varlen=info";

/// Integer width selectable from config and command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    Int,
    Long,
}

impl From<Width> for VarKind {
    fn from(width: Width) -> Self {
        match width {
            Width::Int => VarKind::Int,
            Width::Long => VarKind::Long,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Hex,
    Binary,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub default_width: Width,
    pub output: OutputFormat,
    pub log_filter: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            default_width: Width::Int,
            output: OutputFormat::Hex,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ToolConfig {
    /// Load from `path` (or `varlen.toml`), falling back to defaults when the
    /// file does not exist. Unlike `save`, a missing file is never created.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        if config_file.exists() {
            let content = std::fs::read_to_string(config_file)?;
            let config: ToolConfig = toml::from_str(&content)?;
            tracing::debug!("Loaded config from {:?}", config_file);
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        tracing::info!("Wrote config to {:?}", config_path);
        Ok(())
    }
}
