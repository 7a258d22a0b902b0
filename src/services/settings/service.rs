use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Loads and stores [`Settings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the platform config directory, if one can be resolved.
    pub fn from_project_dirs() -> Option<Self> {
        ProjectDirs::from("com", "WeekScheduler", "WeekScheduler")
            .map(|dirs| Self::new(dirs.config_dir().join(SETTINGS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings; a missing file yields defaults.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Like [`load`](Self::load) but never fails: errors are logged and
    /// defaults returned.
    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{:#}; falling back to default settings", err);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
