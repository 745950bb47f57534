//! User settings, persisted as a RON file next to the app.
//!
//! Only app configuration lives here; kept photos and the trash bin are
//! deliberately in-memory only.

use std::fs;
use std::io::Write;
use std::path::Path;

use kik_logging::{kik_error, kik_info, kik_warn};
use photokik_core::DEFAULT_THRESHOLD_RATIO;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::logging::LogDestination;

pub const SETTINGS_FILENAME: &str = ".photokik_settings.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Swipe sensitivity: the fraction of the card width a drag must cross
    /// before release commits a decision.
    pub swipe_threshold_ratio: f32,
    /// Where log lines go; takes effect on the next start.
    #[serde(default)]
    pub log_destination: LogDestination,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            swipe_threshold_ratio: DEFAULT_THRESHOLD_RATIO,
            log_destination: LogDestination::default(),
        }
    }
}

impl Settings {
    /// Rejects ratios that would commit on every release or on none.
    fn sanitized(mut self) -> Self {
        if !(self.swipe_threshold_ratio.is_finite()
            && self.swipe_threshold_ratio > 0.0
            && self.swipe_threshold_ratio <= 1.0)
        {
            kik_warn!(
                "Ignoring out-of-range swipe threshold ratio {}",
                self.swipe_threshold_ratio
            );
            self.swipe_threshold_ratio = DEFAULT_THRESHOLD_RATIO;
        }
        self
    }
}

/// Loads settings from `path`. A missing or unreadable file degrades to
/// defaults; the app must start regardless.
pub fn load(path: &Path) -> Settings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Settings::default();
        }
        Err(err) => {
            kik_warn!("Failed to read settings from {:?}: {}", path, err);
            return Settings::default();
        }
    };

    match ron::from_str::<Settings>(&content) {
        Ok(settings) => {
            kik_info!("Loaded settings from {:?}", path);
            settings.sanitized()
        }
        Err(err) => {
            kik_warn!("Failed to parse settings from {:?}: {}", path, err);
            Settings::default()
        }
    }
}

/// Saves settings atomically (temp file in the same directory, then rename).
/// Failures are logged, not fatal.
pub fn save(path: &Path, settings: &Settings) {
    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(settings, pretty) {
        Ok(text) => text,
        Err(err) => {
            kik_error!("Failed to serialize settings: {}", err);
            return;
        }
    };

    if let Err(err) = write_atomically(path, &content) {
        kik_error!("Failed to write settings to {:?}: {}", path, err);
    }
}

fn write_atomically(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };
    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace existing file if present to keep determinism.
    if path.exists() {
        fs::remove_file(path)?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
