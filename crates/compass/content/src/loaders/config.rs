//! Tracker configuration loader.

use std::path::Path;

use compass_core::TrackerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for tracker configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`TrackerConfig::default`].
    pub fn load(path: &Path) -> LoadResult<TrackerConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<TrackerConfig> {
        let config: TrackerConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
