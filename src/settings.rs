//! Configuration model and IO.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::visibility::ObserverConfig;

/// File name used under the per-user config directory.
const SETTINGS_FILE: &str = "settings.json";

/// Settings read from `settings.json`. Missing fields take their defaults.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Visible fraction at which a section counts as entered.
    pub threshold: f32,
    /// Points ignored at the bottom of the viewport.
    pub bottom_margin: f32,
    /// Portrait shown in the hero banner.
    pub portrait_path: PathBuf,
    /// Resume offered by the download button.
    pub resume_path: PathBuf,
    /// Window width below which the nav collapses into a drawer.
    pub mobile_breakpoint: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        let defaults = ObserverConfig::default();
        Self {
            threshold: defaults.threshold,
            bottom_margin: defaults.bottom_margin,
            portrait_path: PathBuf::from("assets/portrait.png"),
            resume_path: PathBuf::from("assets/resume.pdf"),
            mobile_breakpoint: 768.0,
        }
    }
}

impl AppSettings {
    pub fn observer_config(&self) -> ObserverConfig {
        ObserverConfig::new(self.threshold, self.bottom_margin)
    }
}

/// Resolve the per-user settings file path.
fn settings_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("dev", "portfolio_viewer", "portfolio_viewer")
        .ok_or_else(|| anyhow!("cannot determine config directory"))?;
    Ok(proj_dirs.config_dir().join(SETTINGS_FILE))
}

/// Parse settings from JSON text.
pub fn parse(contents: &str) -> Result<AppSettings> {
    serde_json::from_str(contents).context("malformed settings.json")
}

/// Load settings from disk, returning defaults when missing or invalid.
pub fn load() -> AppSettings {
    let path = match settings_path() {
        Ok(path) => path,
        Err(err) => {
            log::debug!("using default settings: {err}");
            return AppSettings::default();
        }
    };
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) => {
            log::debug!("no settings at {}, using defaults", path.display());
            return AppSettings::default();
        }
    };
    parse(&contents).unwrap_or_else(|err| {
        log::warn!("{err:#}; using defaults");
        AppSettings::default()
    })
}
