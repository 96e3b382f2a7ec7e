//! Content loaders for reading tracker data from files.
//!
//! TOML is used for configuration, RON for pin presets.

pub mod config;
pub mod preset;

pub use config::ConfigLoader;
pub use preset::PinPresetLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
