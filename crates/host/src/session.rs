//! Per-world tracker session driven by host lifecycle callbacks.

use compass_content::PinPreset;
use compass_core::{
    Bearing, EntityCategory, EntityId, EntityOracle, NearestEntityTracker, NoopObserver,
    PinError, Position, ScanObserver, ScanReport, Subtype, TickOutcome, TrackerConfig,
    TrackerError,
};
use tracing::{debug, info, trace, warn};

use crate::config::HostConfig;

/// What the rendering side needs to draw a directional indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Indicator {
    pub target: EntityId,
    pub category: EntityCategory,
    pub subtype: Subtype,
    pub bearing: Bearing,
}

/// Owns the tracker for the lifetime of the host mod and maps host callbacks
/// onto tracker operations.
#[derive(Debug)]
pub struct CompassSession<O = NoopObserver> {
    tracker: NearestEntityTracker<O>,
    preset: PinPreset,
    world_loaded: bool,
}

impl<O: ScanObserver> CompassSession<O> {
    pub fn tracker(&self) -> &NearestEntityTracker<O> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut NearestEntityTracker<O> {
        &mut self.tracker
    }

    pub fn is_world_loaded(&self) -> bool {
        self.world_loaded
    }

    /// Re-applies the preset and runs an initial scan so the indicator is
    /// available on the first frame.
    pub fn on_world_load<W>(&mut self, player: Position, world: &W) -> ScanReport
    where
        W: EntityOracle + ?Sized,
    {
        info!("world loaded");
        if let Err(err) = self.preset.apply(&mut self.tracker) {
            warn!(
                severity = err.severity().as_str(),
                code = err.error_code(),
                "pin preset only partially applied: {err}"
            );
        }
        self.world_loaded = true;
        self.tracker.scan_now(player, world)
    }

    /// Forgets the tracked entity and drops the pins of the categories
    /// configured in `unload_clears`.
    pub fn on_world_unload(&mut self) {
        let categories = self.tracker.config().unload_clears.clone();
        info!(?categories, "world unloaded");
        self.tracker.clear(categories);
        self.world_loaded = false;
    }

    /// Per simulation step.
    pub fn update<W>(&mut self, player: Position, world: &W) -> TickOutcome
    where
        W: EntityOracle + ?Sized,
    {
        if !self.world_loaded {
            trace!("update before world load ignored");
            return TickOutcome::Waiting {
                elapsed: self.tracker.elapsed_ticks(),
            };
        }
        self.tracker.tick(player, world)
    }

    /// Per draw phase. Returns an indicator only while the tracked entity is
    /// still active.
    pub fn draw<W>(&self, player: Position, world: &W) -> Option<Indicator>
    where
        W: EntityOracle + ?Sized,
    {
        if !self.world_loaded || !self.tracker.has_active_closest(world) {
            return None;
        }
        let entity = self.tracker.closest_entity(world)?;

        Some(Indicator {
            target: entity.id,
            category: entity.category,
            subtype: entity.subtype,
            bearing: Bearing::between(player, entity.position),
        })
    }

    /// Pins the subtype if absent, unpins it otherwise. Returns whether it is
    /// pinned afterwards.
    ///
    /// Unpinning does not drop the tracked entity. The indicator keeps
    /// pointing at it while it stays active, until the next scan picks a
    /// pinned candidate.
    pub fn toggle_pin(
        &mut self,
        category: EntityCategory,
        subtype: Subtype,
    ) -> Result<bool, PinError> {
        if self.tracker.unpin(category, subtype) {
            debug!(%category, %subtype, "toggled off");
            return Ok(false);
        }
        self.tracker.pin(category, subtype)?;
        debug!(%category, %subtype, "toggled on");
        Ok(true)
    }
}

/// Builder for [`CompassSession`].
#[derive(Debug)]
pub struct SessionBuilder<O = NoopObserver> {
    config: TrackerConfig,
    preset: PinPreset,
    observer: O,
}

impl SessionBuilder<NoopObserver> {
    pub fn new() -> Self {
        Self {
            config: TrackerConfig::default(),
            preset: PinPreset::default(),
            observer: NoopObserver,
        }
    }

    /// Builder seeded from environment/file configuration.
    pub fn from_host_config(host: &HostConfig) -> anyhow::Result<Self> {
        Ok(Self::new()
            .config(host.tracker_config()?)
            .preset(host.pin_preset()?))
    }
}

impl Default for SessionBuilder<NoopObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: ScanObserver> SessionBuilder<O> {
    #[must_use]
    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn preset(mut self, preset: PinPreset) -> Self {
        self.preset = preset;
        self
    }

    pub fn observer<P: ScanObserver>(self, observer: P) -> SessionBuilder<P> {
        SessionBuilder {
            config: self.config,
            preset: self.preset,
            observer,
        }
    }

    pub fn build(self) -> CompassSession<O> {
        debug!(
            scan_interval = self.config.scan_interval,
            max_tracked = self.config.max_tracked_entities,
            "building compass session"
        );
        CompassSession {
            tracker: NearestEntityTracker::with_observer(self.config, self.observer),
            preset: self.preset,
            world_loaded: false,
        }
    }
}
