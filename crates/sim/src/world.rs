//! Synthetic entity pool standing in for a game host.

use compass_core::{EntityCategory, EntityId, EntityOracle, EntitySnapshot, Position, Subtype};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Half-width of the square arena entities wander in.
const ARENA: f32 = 200.0;
const STEP: f32 = 2.5;
/// Chance per step that an active NPC despawns (and an inactive one respawns).
const TOGGLE_CHANCE: f64 = 0.01;

pub struct SyntheticWorld {
    entities: Vec<EntitySnapshot>,
    pub player: Position,
    rng: StdRng,
}

impl SyntheticWorld {
    /// Spawns `npcs` NPCs with subtypes drawn from `subtypes` at random
    /// positions.
    pub fn new(npcs: u32, subtypes: &[i32], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let entities = (0..npcs)
            .map(|id| {
                let subtype = subtypes[rng.random_range(0..subtypes.len())];
                EntitySnapshot {
                    id: EntityId(id),
                    active: true,
                    category: EntityCategory::Npc,
                    subtype: Subtype(subtype),
                    position: random_position(&mut rng),
                }
            })
            .collect();

        Self {
            entities,
            player: Position::ORIGIN,
            rng,
        }
    }

    /// Moves every entity and the player one step and flips a few NPCs
    /// between active and inactive.
    pub fn step(&mut self) {
        for entity in &mut self.entities {
            entity.position = wander(&mut self.rng, entity.position);
            if self.rng.random_bool(TOGGLE_CHANCE) {
                entity.active = !entity.active;
            }
        }
        self.player = wander(&mut self.rng, self.player);
    }

    pub fn active_count(&self) -> usize {
        self.entities.iter().filter(|entity| entity.active).count()
    }
}

impl EntityOracle for SyntheticWorld {
    fn entity(&self, id: EntityId) -> Option<EntitySnapshot> {
        self.entities.entity(id)
    }

    fn candidates(&self) -> impl Iterator<Item = EntitySnapshot> + '_ {
        self.entities.candidates()
    }
}

fn random_position(rng: &mut StdRng) -> Position {
    Position::new(rng.random_range(-ARENA..ARENA), rng.random_range(-ARENA..ARENA))
}

fn wander(rng: &mut StdRng, position: Position) -> Position {
    let x = position.x + rng.random_range(-STEP..=STEP);
    let y = position.y + rng.random_range(-STEP..=STEP);
    Position::new(x.clamp(-ARENA, ARENA), y.clamp(-ARENA, ARENA))
}
