//! The nearest-entity tracker.
//!
//! [`NearestEntityTracker`] keeps a pin registry and a cached handle to the
//! closest pinned entity. The host calls [`NearestEntityTracker::on_tick`] once
//! per simulation step; every `scan_interval` ticks the tracker walks the full
//! candidate set and refreshes the cached handle. Queries re-check liveness
//! through the host oracle on every call, so a handle that went stale between
//! scans is never reported as live.
mod bearing;
mod observer;
mod scan;

pub use bearing::Bearing;
pub use observer::{NoopObserver, ScanObserver};
pub use scan::ScanReport;

use tracing::{debug, trace, warn};

use crate::config::TrackerConfig;
use crate::env::{EntityCategory, EntityId, EntityOracle, EntitySnapshot, Position, Subtype};
use crate::error::{PinError, TrackerError};
use crate::pins::PinRegistry;

/// What a call to [`NearestEntityTracker::on_tick`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Interval not yet exceeded; carries the tick counter after the increment.
    Waiting { elapsed: u64 },
    /// A scan ran and the counter was reset.
    Scanned(ScanReport),
}

impl TickOutcome {
    pub fn report(&self) -> Option<&ScanReport> {
        match self {
            Self::Waiting { .. } => None,
            Self::Scanned(report) => Some(report),
        }
    }
}

/// Mutable per-world state of the tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackerState {
    /// Last entity picked by a scan. Only ever set to an entity that was
    /// active and pinned when observed.
    pub closest: Option<EntityId>,
    pub elapsed_ticks: u64,
}

/// Periodic nearest-entity scanner with a category/subtype allow-list.
///
/// Single-threaded: the host drives it from its update and draw phases and
/// never concurrently.
#[derive(Debug)]
pub struct NearestEntityTracker<O = NoopObserver> {
    config: TrackerConfig,
    registry: PinRegistry,
    state: TrackerState,
    observer: O,
}

impl NearestEntityTracker<NoopObserver> {
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_observer(config, NoopObserver)
    }
}

impl Default for NearestEntityTracker<NoopObserver> {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl<O: ScanObserver> NearestEntityTracker<O> {
    pub fn with_observer(config: TrackerConfig, observer: O) -> Self {
        let registry = PinRegistry::with_limit(config.max_tracked_entities);
        Self {
            config,
            registry,
            state: TrackerState::default(),
            observer,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn registry(&self) -> &PinRegistry {
        &self.registry
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.state.elapsed_ticks
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    // ===== pin management =====

    /// Makes `subtype` eligible for tracking. Returns `Ok(false)` if it
    /// already was.
    ///
    /// # Errors
    ///
    /// [`PinError::CapacityReached`] when `category` already holds
    /// `max_tracked_entities` other subtypes.
    pub fn pin(&mut self, category: EntityCategory, subtype: Subtype) -> Result<bool, PinError> {
        match self.registry.pin(category, subtype) {
            Ok(added) => {
                if added {
                    debug!(%category, %subtype, "pinned");
                }
                Ok(added)
            }
            Err(err) => {
                warn!(
                    %category,
                    %subtype,
                    severity = err.severity().as_str(),
                    code = err.error_code(),
                    "{err}"
                );
                Err(err)
            }
        }
    }

    /// Pins several subtypes, stopping at the first rejection. Returns how
    /// many were newly added.
    pub fn pin_all(
        &mut self,
        category: EntityCategory,
        subtypes: impl IntoIterator<Item = Subtype>,
    ) -> Result<usize, PinError> {
        let mut added = 0;
        for subtype in subtypes {
            if self.pin(category, subtype)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Removes `subtype` from the allow-list. Returns true if it was pinned.
    pub fn unpin(&mut self, category: EntityCategory, subtype: Subtype) -> bool {
        let removed = self.registry.unpin(category, subtype);
        if removed {
            debug!(%category, %subtype, "unpinned");
        }
        removed
    }

    pub fn is_pinned(&self, category: EntityCategory, subtype: Subtype) -> bool {
        self.registry.is_pinned(category, subtype)
    }

    pub fn pinned(&self, category: EntityCategory) -> impl Iterator<Item = Subtype> + '_ {
        self.registry.pinned(category)
    }

    // ===== tick-driven scan =====

    /// Advances the tick counter by `delta_ticks` and scans once it exceeds
    /// the configured interval.
    pub fn on_tick<W>(&mut self, player: Position, world: &W, delta_ticks: u64) -> TickOutcome
    where
        W: EntityOracle + ?Sized,
    {
        self.state.elapsed_ticks = self.state.elapsed_ticks.saturating_add(delta_ticks);

        if self.state.elapsed_ticks <= self.config.scan_interval {
            trace!(elapsed = self.state.elapsed_ticks, "waiting for next scan");
            return TickOutcome::Waiting {
                elapsed: self.state.elapsed_ticks,
            };
        }

        TickOutcome::Scanned(self.scan_now(player, world))
    }

    /// [`on_tick`](Self::on_tick) with a single elapsed tick.
    pub fn tick<W>(&mut self, player: Position, world: &W) -> TickOutcome
    where
        W: EntityOracle + ?Sized,
    {
        self.on_tick(player, world, 1)
    }

    /// Runs a full scan immediately and resets the tick counter.
    pub fn scan_now<W>(&mut self, player: Position, world: &W) -> ScanReport
    where
        W: EntityOracle + ?Sized,
    {
        let report = scan::find_closest(player, self.state.closest, &self.registry, world);
        self.state.closest = report.closest;
        self.state.elapsed_ticks = 0;

        debug!(
            examined = report.examined,
            eligible = report.eligible,
            closest = ?report.closest,
            "scan complete"
        );

        if let (true, Some(current)) = (report.changed(), report.closest) {
            debug!(previous = ?report.previous, %current, "closest entity reassigned");
            self.observer.on_closest_changed(report.previous, current);
        }
        self.observer.on_scan(&report);

        report
    }

    // ===== queries =====

    /// True iff there is a cached closest entity and the host reports it as
    /// active right now.
    pub fn has_active_closest<W>(&self, world: &W) -> bool
    where
        W: EntityOracle + ?Sized,
    {
        self.state.closest.is_some_and(|id| world.is_active(id))
    }

    /// Raw cached handle, regardless of whether the entity is still active.
    /// Pair with [`has_active_closest`](Self::has_active_closest) when
    /// liveness matters.
    pub fn closest(&self) -> Option<EntityId> {
        self.state.closest
    }

    /// Current snapshot of the closest entity, only while it is active.
    pub fn closest_entity<W>(&self, world: &W) -> Option<EntitySnapshot>
    where
        W: EntityOracle + ?Sized,
    {
        self.state
            .closest
            .and_then(|id| world.entity(id))
            .filter(|entity| entity.active)
    }

    /// Direction from `player` to the live closest entity.
    pub fn bearing_to_closest<W>(&self, player: Position, world: &W) -> Option<Bearing>
    where
        W: EntityOracle + ?Sized,
    {
        self.closest_entity(world)
            .map(|entity| Bearing::between(player, entity.position))
    }

    // ===== reset =====

    /// Forgets the closest entity, resets the tick counter and drops the pins
    /// of exactly the given categories.
    pub fn clear(&mut self, categories: impl IntoIterator<Item = EntityCategory>) {
        self.reset_state();
        for category in categories {
            let removed = self.registry.clear_category(category);
            debug!(%category, removed, "cleared pins");
        }
    }

    /// Forgets the closest entity and resets the tick counter; pins stay.
    pub fn reset_state(&mut self) {
        self.state = TrackerState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NPC: EntityCategory = EntityCategory::Npc;

    fn tracker(interval: u64) -> NearestEntityTracker {
        NearestEntityTracker::new(TrackerConfig::new().with_scan_interval(interval))
    }

    #[derive(Default)]
    struct Recorder {
        scans: usize,
        changes: Vec<(Option<EntityId>, EntityId)>,
    }

    impl ScanObserver for Recorder {
        fn on_scan(&mut self, _report: &ScanReport) {
            self.scans += 1;
        }

        fn on_closest_changed(&mut self, previous: Option<EntityId>, current: EntityId) {
            self.changes.push((previous, current));
        }
    }

    #[test]
    fn no_scan_until_interval_exceeded() {
        let mut tracker = tracker(3);
        tracker.pin(NPC, Subtype(1)).unwrap();
        let world = vec![EntitySnapshot::npc(1, 1, Position::new(1.0, 0.0))];

        for expected in 1..=3 {
            assert_eq!(
                tracker.tick(Position::ORIGIN, &world),
                TickOutcome::Waiting { elapsed: expected }
            );
            assert_eq!(tracker.closest(), None);
        }

        let outcome = tracker.tick(Position::ORIGIN, &world);
        assert_eq!(outcome.report().and_then(|r| r.closest), Some(EntityId(1)));
        assert_eq!(tracker.elapsed_ticks(), 0);
    }

    #[test]
    fn large_delta_triggers_scan() {
        let mut tracker = tracker(180);
        tracker.pin(NPC, Subtype(1)).unwrap();
        let world = vec![EntitySnapshot::npc(1, 1, Position::new(1.0, 0.0))];

        assert!(matches!(
            tracker.on_tick(Position::ORIGIN, &world, 180),
            TickOutcome::Waiting { elapsed: 180 }
        ));
        assert!(matches!(
            tracker.on_tick(Position::ORIGIN, &world, 1),
            TickOutcome::Scanned(_)
        ));
    }

    #[test]
    fn stale_closest_is_not_reported_live() {
        let mut tracker = tracker(0);
        tracker.pin(NPC, Subtype(1)).unwrap();
        let mut world = vec![EntitySnapshot::npc(1, 1, Position::new(1.0, 0.0))];
        tracker.scan_now(Position::ORIGIN, &world);
        assert!(tracker.has_active_closest(&world));

        world[0].active = false;

        assert!(!tracker.has_active_closest(&world));
        assert_eq!(tracker.closest(), Some(EntityId(1)));
        assert_eq!(tracker.closest_entity(&world), None);
        assert_eq!(tracker.bearing_to_closest(Position::ORIGIN, &world), None);
    }

    #[test]
    fn clear_is_category_scoped() {
        let mut tracker = tracker(10);
        tracker.pin(NPC, Subtype(1)).unwrap();
        tracker.pin(EntityCategory::Item, Subtype(5)).unwrap();
        let world = vec![EntitySnapshot::npc(1, 1, Position::new(1.0, 0.0))];
        tracker.scan_now(Position::ORIGIN, &world);
        tracker.on_tick(Position::ORIGIN, &world, 2);
        assert_eq!(tracker.elapsed_ticks(), 2);

        tracker.clear([NPC]);

        assert_eq!(tracker.closest(), None);
        assert_eq!(tracker.elapsed_ticks(), 0);
        assert!(!tracker.is_pinned(NPC, Subtype(1)));
        assert!(tracker.is_pinned(EntityCategory::Item, Subtype(5)));
    }

    #[test]
    fn observer_sees_scans_and_changes() {
        let config = TrackerConfig::new().with_scan_interval(0);
        let mut tracker = NearestEntityTracker::with_observer(config, Recorder::default());
        tracker.pin(NPC, Subtype(1)).unwrap();
        let mut world = vec![EntitySnapshot::npc(1, 1, Position::new(4.0, 0.0))];

        tracker.tick(Position::ORIGIN, &world);
        tracker.tick(Position::ORIGIN, &world);
        world.push(EntitySnapshot::npc(2, 1, Position::new(2.0, 0.0)));
        tracker.tick(Position::ORIGIN, &world);

        assert_eq!(tracker.observer().scans, 3);
        assert_eq!(
            tracker.observer().changes,
            vec![(None, EntityId(1)), (Some(EntityId(1)), EntityId(2))]
        );
    }

    #[test]
    fn pin_all_stops_at_capacity() {
        let config = TrackerConfig::new().with_max_tracked_entities(2);
        let mut tracker = NearestEntityTracker::new(config);

        let result = tracker.pin_all(NPC, [Subtype(1), Subtype(2), Subtype(3)]);

        assert!(matches!(result, Err(PinError::CapacityReached { limit: 2, .. })));
        assert!(tracker.is_pinned(NPC, Subtype(2)));
        assert!(!tracker.is_pinned(NPC, Subtype(3)));
    }
}
