//! Linear nearest-entity scan.

use tracing::{debug, trace};

use crate::env::{EntityId, EntityOracle, Position};
use crate::pins::PinRegistry;

/// Result of one full scan over the candidate set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanReport {
    /// Closest entity before the scan.
    pub previous: Option<EntityId>,
    /// Closest entity after the scan.
    pub closest: Option<EntityId>,
    /// Distance to `closest` as measured during this scan, if it was
    /// confirmed live and eligible.
    pub distance: Option<f32>,
    /// Candidates visited.
    pub examined: usize,
    /// Candidates that were active and pinned.
    pub eligible: usize,
}

impl ScanReport {
    pub fn changed(&self) -> bool {
        self.closest != self.previous
    }
}

/// Picks the closest active, pinned entity.
///
/// The previous closest competes only while it is still active, pinned and at
/// a finite distance; candidates with non-finite positions are skipped. A
/// candidate replaces the current best only when strictly nearer, so ties go
/// to whichever was seen first. When nothing eligible is found the previous
/// handle is kept as-is; callers re-check liveness at query time.
pub(crate) fn find_closest<W>(
    player: Position,
    previous: Option<EntityId>,
    registry: &PinRegistry,
    world: &W,
) -> ScanReport
where
    W: EntityOracle + ?Sized,
{
    let mut best: Option<(EntityId, f32)> = previous
        .and_then(|id| world.entity(id))
        .filter(|entity| entity.active && registry.is_pinned(entity.category, entity.subtype))
        .map(|entity| (entity.id, player.distance(entity.position)))
        .filter(|(_, distance)| distance.is_finite());

    let mut examined = 0;
    let mut eligible = 0;

    for entity in world.candidates() {
        examined += 1;
        if !entity.active || !registry.is_pinned(entity.category, entity.subtype) {
            continue;
        }

        let distance = player.distance(entity.position);
        if !distance.is_finite() {
            trace!(entity = %entity.id, "skipping candidate with non-finite position");
            continue;
        }
        eligible += 1;

        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => {
                debug!(
                    entity = %entity.id,
                    subtype = %entity.subtype,
                    distance,
                    "new closest candidate"
                );
                best = Some((entity.id, distance));
            }
        }
    }

    ScanReport {
        previous,
        closest: best.map(|(id, _)| id).or(previous),
        distance: best.map(|(_, distance)| distance),
        examined,
        eligible,
    }
}
