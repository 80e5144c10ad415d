use crate::domain::state::{Position, Projectile};
use crate::domain::tuning::ProjectileTuning;

/// Owns every live projectile. Nothing outside the registry keeps a reference
/// to a projectile once it has been removed.
pub struct ProjectileRegistry {
    live: Vec<Projectile>,
    next_id: u64,
    tuning: ProjectileTuning,
}

impl ProjectileRegistry {
    pub fn new(tuning: ProjectileTuning) -> Self {
        Self {
            live: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Spawns a projectile just past the right edge of the origin entity.
    pub fn spawn(&mut self, origin: Position, origin_half_width: f32) -> &Projectile {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        self.live.push(Projectile {
            id,
            position: Position {
                x: origin.x + origin_half_width + self.tuning.spawn_offset,
                y: origin.y,
                z: origin.z,
            },
        });

        // Just pushed, so the slot exists.
        &self.live[self.live.len() - 1]
    }

    /// Moves every projectile forward and drops the ones past `right_boundary`.
    ///
    /// `retain_mut` visits each element exactly once in order, so several
    /// removals in the same pass never skip or double-advance a survivor.
    /// Each removed projectile is handed to `on_removed` before it is dropped.
    pub fn advance(&mut self, right_boundary: f32, mut on_removed: impl FnMut(&Projectile)) {
        let speed = self.tuning.speed;
        self.live.retain_mut(|p| {
            p.position.x += speed;
            if p.position.x > right_boundary {
                on_removed(p);
                false
            } else {
                true
            }
        });
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.live.iter()
    }
}
