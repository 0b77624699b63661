//! JSON configuration and report helpers for frame tracking.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::params::TailTrackerParams;
use crate::preprocess::PreprocessError;
use crate::tracker::TrackResult;

#[derive(thiserror::Error, Debug)]
pub enum TrackIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Configuration for the frame-tracking driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailTrackConfig {
    pub image_path: String,
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default)]
    pub params: TailTrackerParams,
}

impl TailTrackConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, TrackIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), TrackIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output report path.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("tailtrack_report.json"))
    }
}

/// Per-frame tracking report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailTrackReport {
    pub image_path: String,
    pub config_path: String,
    pub params: TailTrackerParams,
    #[serde(default)]
    pub result: Option<TrackResult>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TailTrackReport {
    /// Build a base report from the input config.
    pub fn new(cfg: &TailTrackConfig, config_path: &Path) -> Self {
        Self {
            image_path: cfg.image_path.clone(),
            config_path: config_path.to_string_lossy().into_owned(),
            params: cfg.params,
            result: None,
            error: None,
        }
    }

    /// Record a successful track.
    pub fn set_result(&mut self, result: TrackResult) {
        self.result = Some(result);
        self.error = None;
    }

    /// Record a tracking error.
    pub fn set_error(&mut self, err: &PreprocessError) {
        self.error = Some(err.to_string());
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, TrackIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), TrackIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
