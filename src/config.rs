//! Configuration handling for the TUI

use crate::backend::{SimulatedBackend, OUTBOX_ENV};
use crate::tooltip::PositionRules;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default upper bound for one submission
const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);
/// Default tooltip gap and edge margin, in cells
const DEFAULT_TOOLTIP_MARGIN: u16 = 1;

/// Which submission backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    Simulated,
    Outbox,
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StudioConfig {
    /// Submission backend
    pub backend: Option<BackendKind>,
    /// Delay of the simulated backend in milliseconds
    pub simulated_delay_ms: Option<u64>,
    /// Make the simulated backend fail every submission
    pub simulate_failure: Option<bool>,
    /// Where the outbox backend writes
    pub outbox_path: Option<PathBuf>,
    /// Submission timeout in milliseconds
    pub submit_timeout_ms: Option<u64>,
    /// Tooltip gap and viewport margin in cells
    pub tooltip_margin: Option<u16>,
}

impl StudioConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("fr", "Roches Web Studio", "studio-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, writing the defaults there on first run
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            match config.save(path) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "wrote default configuration")
                }
                Err(err) => tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "could not write default configuration"
                ),
            }
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let config: StudioConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to `path` as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.unwrap_or_default()
    }

    pub fn simulated_delay(&self) -> Duration {
        self.simulated_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(SimulatedBackend::DEFAULT_DELAY)
    }

    pub fn submit_timeout(&self) -> Duration {
        self.submit_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMIT_TIMEOUT)
    }

    pub fn tooltip_rules(&self) -> PositionRules {
        PositionRules::uniform(f32::from(
            self.tooltip_margin.unwrap_or(DEFAULT_TOOLTIP_MARGIN),
        ))
    }

    /// Outbox location: environment, then config file, then the data dir
    pub fn outbox_path(&self) -> PathBuf {
        if let Ok(path) = std::env::var(OUTBOX_ENV) {
            return PathBuf::from(path);
        }
        if let Some(path) = &self.outbox_path {
            return path.clone();
        }
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join("outbox.jsonl"))
            .unwrap_or_else(|| PathBuf::from("outbox.jsonl"))
    }
}
