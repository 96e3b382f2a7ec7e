//! Data-driven tracker content and loaders.
//!
//! This crate reads tracker data from files:
//! - Tracker configuration (TOML)
//! - Pin presets, i.e. which subtypes to track per category (RON)
//!
//! All loaders deserialize compass-core types directly with serde.

pub mod preset;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use preset::{PinPreset, PresetEntry};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, PinPresetLoader};
