//! Pin preset loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::preset::PinPreset;

/// Loader for pin presets from RON files.
pub struct PinPresetLoader;

impl PinPresetLoader {
    /// Load a pin preset from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a PinPreset
    pub fn load(path: &Path) -> LoadResult<PinPreset> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<PinPreset> {
        let preset: PinPreset = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse pin preset RON: {}", e))?;

        Ok(preset)
    }
}
