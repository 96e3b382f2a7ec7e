use crate::env::Position;

/// Direction and distance from the player to a target.
///
/// This is everything a renderer needs to orient an indicator sprite; the
/// tracker itself draws nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bearing {
    /// Angle in radians, `atan2(dy, dx)`, in `(-PI, PI]`.
    pub angle: f32,
    pub distance: f32,
    /// Unit vector toward the target; zero when the target is on the player.
    pub direction: Position,
}

impl Bearing {
    pub fn between(from: Position, to: Position) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let distance = (dx * dx + dy * dy).sqrt();
        let direction = if distance > f32::EPSILON {
            Position::new(dx / distance, dy / distance)
        } else {
            Position::ORIGIN
        };

        Self {
            angle: dy.atan2(dx),
            distance,
            direction,
        }
    }
}
