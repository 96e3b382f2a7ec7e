//! Optional hook for watching scans from the outside.

use crate::env::EntityId;

use super::ScanReport;

/// Receives notifications from [`NearestEntityTracker`](super::NearestEntityTracker).
///
/// Both methods default to doing nothing, so an observer only implements
/// what it cares about.
pub trait ScanObserver {
    /// Called after every completed scan, forced or periodic.
    fn on_scan(&mut self, _report: &ScanReport) {}

    /// Called when a scan picks a different closest entity.
    fn on_closest_changed(&mut self, _previous: Option<EntityId>, _current: EntityId) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

impl<O: ScanObserver + ?Sized> ScanObserver for &mut O {
    fn on_scan(&mut self, report: &ScanReport) {
        (**self).on_scan(report);
    }

    fn on_closest_changed(&mut self, previous: Option<EntityId>, current: EntityId) {
        (**self).on_closest_changed(previous, current);
    }
}

impl<O: ScanObserver + ?Sized> ScanObserver for Box<O> {
    fn on_scan(&mut self, report: &ScanReport) {
        (**self).on_scan(report);
    }

    fn on_closest_changed(&mut self, previous: Option<EntityId>, current: EntityId) {
        (**self).on_closest_changed(previous, current);
    }
}
