//! Allow-list of entity subtypes eligible for tracking.

use std::collections::{HashMap, HashSet};

use crate::config::TrackerConfig;
use crate::env::{EntityCategory, Subtype};
use crate::error::PinError;

/// Pinned subtypes grouped by category.
///
/// Every category starts out empty. Membership tests are O(1) on average and
/// a category that was never touched simply reads as "nothing pinned".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinRegistry {
    pins: HashMap<EntityCategory, HashSet<Subtype>>,
    limit: usize,
}

impl PinRegistry {
    /// Creates an empty registry that accepts at most `limit` subtypes per
    /// category.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            pins: HashMap::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Pins `subtype`. Returns `Ok(false)` if it was already pinned.
    ///
    /// # Errors
    ///
    /// Returns [`PinError::CapacityReached`] when the category already holds
    /// `limit` subtypes and `subtype` is not one of them.
    pub fn pin(&mut self, category: EntityCategory, subtype: Subtype) -> Result<bool, PinError> {
        let set = self.pins.entry(category).or_default();
        if set.contains(&subtype) {
            return Ok(false);
        }
        if set.len() >= self.limit {
            return Err(PinError::CapacityReached {
                category,
                subtype,
                limit: self.limit,
            });
        }
        Ok(set.insert(subtype))
    }

    /// Unpins `subtype`. Returns true if it was pinned.
    pub fn unpin(&mut self, category: EntityCategory, subtype: Subtype) -> bool {
        self.pins
            .get_mut(&category)
            .is_some_and(|set| set.remove(&subtype))
    }

    pub fn is_pinned(&self, category: EntityCategory, subtype: Subtype) -> bool {
        self.pins
            .get(&category)
            .is_some_and(|set| set.contains(&subtype))
    }

    /// Pinned subtypes of `category`, in no particular order.
    pub fn pinned(&self, category: EntityCategory) -> impl Iterator<Item = Subtype> + '_ {
        self.pins.get(&category).into_iter().flatten().copied()
    }

    pub fn len(&self, category: EntityCategory) -> usize {
        self.pins.get(&category).map_or(0, HashSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.pins.values().all(HashSet::is_empty)
    }

    /// Drops every pin of `category`. Returns how many were removed.
    pub fn clear_category(&mut self, category: EntityCategory) -> usize {
        self.pins.remove(&category).map_or(0, |set| set.len())
    }
}

impl Default for PinRegistry {
    fn default() -> Self {
        Self::with_limit(TrackerConfig::DEFAULT_MAX_TRACKED_ENTITIES)
    }
}
