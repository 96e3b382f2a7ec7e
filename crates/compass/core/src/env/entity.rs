use std::fmt;

/// Opaque handle for an entity owned by the host simulation.
///
/// The tracker only ever stores this handle. Whether the entity still exists
/// (or is still active) must be asked of the host through
/// [`EntityOracle`](super::EntityOracle) every time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Coarse kind of a host entity.
///
/// Carried on every snapshot so eligibility is a plain discriminant check
/// rather than a run-time type inspection.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityCategory {
    Npc,
    Projectile,
    Item,
    Player,
}

/// Host-defined subtype number within a category (e.g. an NPC type id).
///
/// Signed because hosts commonly use negative ids for variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Subtype(pub i32);

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Subtype {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Continuous world position in host units.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_squared(self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Position) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// What the host reports about one entity at the time of the call.
///
/// Snapshots are cheap copies; none of the fields are owned by the tracker and
/// all of them may change between ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub active: bool,
    pub category: EntityCategory,
    pub subtype: Subtype,
    pub position: Position,
}

impl EntitySnapshot {
    /// Active NPC snapshot, the common case.
    pub fn npc(id: u32, subtype: i32, position: Position) -> Self {
        Self {
            id: EntityId(id),
            active: true,
            category: EntityCategory::Npc,
            subtype: Subtype(subtype),
            position,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: EntityCategory) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}
