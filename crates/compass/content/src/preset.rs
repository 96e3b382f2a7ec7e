//! Pin presets: named allow-lists applied to a tracker in one go.

use compass_core::{EntityCategory, NearestEntityTracker, PinError, ScanObserver, Subtype};
use tracing::info;

/// Subtypes to pin for one category.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresetEntry {
    pub category: EntityCategory,
    pub subtypes: Vec<Subtype>,
}

/// A set of pins, typically loaded from a RON file at world load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinPreset {
    pub pins: Vec<PresetEntry>,
}

impl PinPreset {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(
        mut self,
        category: EntityCategory,
        subtypes: impl IntoIterator<Item = i32>,
    ) -> Self {
        self.pins.push(PresetEntry {
            category,
            subtypes: subtypes.into_iter().map(Subtype).collect(),
        });
        self
    }

    /// Pins every entry into `tracker`. Returns the number of newly pinned
    /// subtypes.
    ///
    /// # Errors
    ///
    /// Stops at the first [`PinError`]; entries before it stay pinned.
    pub fn apply<O: ScanObserver>(
        &self,
        tracker: &mut NearestEntityTracker<O>,
    ) -> Result<usize, PinError> {
        let mut added = 0;
        for entry in &self.pins {
            added += tracker.pin_all(entry.category, entry.subtypes.iter().copied())?;
        }
        info!(added, entries = self.pins.len(), "applied pin preset");
        Ok(added)
    }
}
