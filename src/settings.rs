use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::segmentation::LabelingConfig;
use crate::log_warn;

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Drop existing segments when a new series is loaded
    pub clear_segments_on_load: bool,
    pub default_label: String,
    pub empty_label: String,
    pub hue_step: u32,
    pub saturation: u8,
    pub lightness: u8,
    /// Decimals shown in the stats row
    pub stats_precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        let labeling = LabelingConfig::default();
        Self {
            clear_segments_on_load: true,
            default_label: labeling.default_label,
            empty_label: labeling.empty_label,
            hue_step: labeling.hue_step,
            saturation: labeling.saturation,
            lightness: labeling.lightness,
            stats_precision: 2,
        }
    }
}

impl Settings {
    pub fn labeling(&self) -> LabelingConfig {
        LabelingConfig {
            default_label: self.default_label.clone(),
            empty_label: self.empty_label.clone(),
            hue_step: self.hue_step,
            saturation: self.saturation,
            lightness: self.lightness,
        }
    }
}

/// Settings backed by a JSON file. A missing file means defaults; an
/// unreadable JSON body falls back to defaults with a warning.
pub struct SettingsStore {
    path: PathBuf,
    data: Settings,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!(
                    "Ignoring malformed settings in {}: {err}; using defaults",
                    path.display()
                );
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self { path, data })
    }

    pub fn settings(&self) -> &Settings {
        &self.data
    }

    pub fn update(&mut self, settings: Settings) -> Result<()> {
        self.data = settings;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
