//! Host configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use anyhow::Context;
use compass_content::{ConfigLoader, PinPreset, PinPresetLoader};
use compass_core::TrackerConfig;

/// Where the tracker configuration and pin preset come from.
#[derive(Clone, Debug, Default)]
pub struct HostConfig {
    pub config_path: Option<PathBuf>,
    pub pins_path: Option<PathBuf>,
    pub scan_interval: Option<u64>,
    pub max_tracked: Option<usize>,
}

impl HostConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COMPASS_CONFIG` - TOML file with a `TrackerConfig` (default: built-in defaults)
    /// - `COMPASS_PINS` - RON file with a `PinPreset` (default: nothing pinned)
    /// - `COMPASS_SCAN_INTERVAL` - Ticks between scans, overrides the file (default: 180)
    /// - `COMPASS_MAX_TRACKED` - Pinned subtypes per category, overrides the file (default: 200)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            config_path: lookup("COMPASS_CONFIG").map(PathBuf::from),
            pins_path: lookup("COMPASS_PINS").map(PathBuf::from),
            scan_interval: parse_value(lookup("COMPASS_SCAN_INTERVAL")),
            max_tracked: parse_value(lookup("COMPASS_MAX_TRACKED")),
        }
    }

    /// Loads the configured TOML file (if any) and applies overrides.
    pub fn tracker_config(&self) -> anyhow::Result<TrackerConfig> {
        let mut config = match &self.config_path {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("loading tracker config {}", path.display()))?,
            None => TrackerConfig::default(),
        };

        if let Some(interval) = self.scan_interval {
            config.scan_interval = interval;
        }
        if let Some(max) = self.max_tracked {
            config.max_tracked_entities = max;
        }

        Ok(config)
    }

    /// Loads the configured pin preset, or an empty one.
    pub fn pin_preset(&self) -> anyhow::Result<PinPreset> {
        match &self.pins_path {
            Some(path) => PinPresetLoader::load(path)
                .with_context(|| format!("loading pin preset {}", path.display())),
            None => Ok(PinPreset::default()),
        }
    }
}

fn parse_value<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
