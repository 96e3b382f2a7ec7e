//! Host-facing view of the entity pool.
//!
//! The host owns every entity. The tracker reads it only through
//! [`EntityOracle`], passed in on each call, so nothing here reaches into
//! global engine state and tests can hand over plain candidate lists.
mod entity;

pub use entity::{EntityCategory, EntityId, EntitySnapshot, Position, Subtype};

/// Read-only access to the host's entity pool for the current tick.
pub trait EntityOracle {
    /// Looks up the current state of an entity by handle.
    ///
    /// Returns `None` once the host has dropped the entity entirely.
    fn entity(&self, id: EntityId) -> Option<EntitySnapshot>;

    /// Every entity that may be considered by a scan, in the host's natural
    /// iteration order. Scan tie-breaks depend on this order.
    fn candidates(&self) -> impl Iterator<Item = EntitySnapshot> + '_;

    /// Returns true if the entity exists and is currently active.
    fn is_active(&self, id: EntityId) -> bool {
        self.entity(id).is_some_and(|entity| entity.active)
    }
}

impl EntityOracle for [EntitySnapshot] {
    fn entity(&self, id: EntityId) -> Option<EntitySnapshot> {
        self.iter().find(|entity| entity.id == id).copied()
    }

    fn candidates(&self) -> impl Iterator<Item = EntitySnapshot> + '_ {
        self.iter().copied()
    }
}

impl EntityOracle for Vec<EntitySnapshot> {
    fn entity(&self, id: EntityId) -> Option<EntitySnapshot> {
        self.as_slice().entity(id)
    }

    fn candidates(&self) -> impl Iterator<Item = EntitySnapshot> + '_ {
        self.as_slice().candidates()
    }
}
