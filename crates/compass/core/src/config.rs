use crate::env::EntityCategory;

/// Tracker tunables fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    /// A scan runs once the elapsed tick counter exceeds this value.
    pub scan_interval: u64,

    /// Maximum number of pinned subtypes per category. Pins beyond this are
    /// rejected with [`PinError::CapacityReached`](crate::PinError).
    pub max_tracked_entities: usize,

    /// Categories whose pins are dropped when the host unloads the world.
    pub unload_clears: Vec<EntityCategory>,
}

impl TrackerConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SCAN_INTERVAL: u64 = 180;
    pub const DEFAULT_MAX_TRACKED_ENTITIES: usize = 200;

    pub fn new() -> Self {
        Self {
            scan_interval: Self::DEFAULT_SCAN_INTERVAL,
            max_tracked_entities: Self::DEFAULT_MAX_TRACKED_ENTITIES,
            unload_clears: vec![EntityCategory::Npc],
        }
    }

    #[must_use]
    pub fn with_scan_interval(mut self, scan_interval: u64) -> Self {
        self.scan_interval = scan_interval;
        self
    }

    #[must_use]
    pub fn with_max_tracked_entities(mut self, max_tracked_entities: usize) -> Self {
        self.max_tracked_entities = max_tracked_entities;
        self
    }

    #[must_use]
    pub fn with_unload_clears(
        mut self,
        categories: impl IntoIterator<Item = EntityCategory>,
    ) -> Self {
        self.unload_clears = categories.into_iter().collect();
        self
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new()
    }
}
