use crate::domain::bounds::BoundsEnvelope;
use crate::domain::cooldown::CooldownGate;
use crate::domain::state::{Craft, Facing, Position, Projectile, Velocity};
use crate::domain::systems::projectiles::ProjectileRegistry;
use crate::domain::tuning::CraftTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Drives the single player craft from discrete key presses.
pub struct CraftController {
    craft: Craft,
    move_speed: f32,
}

impl CraftController {
    pub fn new(tuning: CraftTuning) -> Self {
        Self {
            craft: Craft {
                position: Position {
                    x: 0.0,
                    y: 0.0,
                    z: tuning.depth,
                },
                velocity: Velocity::default(),
                facing: Facing::Right,
                half_size: tuning.half_size,
            },
            move_speed: tuning.move_speed,
        }
    }

    pub fn craft(&self) -> &Craft {
        &self.craft
    }

    /// Applies a key press or release. The x and y axes are separate state:
    /// releasing a key zeroes only its own axis, and the latest press on an
    /// axis overwrites the previous one.
    pub fn on_directional_input(&mut self, direction: Direction, pressed: bool) {
        let speed = if pressed { self.move_speed } else { 0.0 };
        let craft = &mut self.craft;

        match direction {
            Direction::Up => craft.velocity.y = speed,
            Direction::Down => craft.velocity.y = -speed,
            Direction::Left => craft.velocity.x = -speed,
            Direction::Right => craft.velocity.x = speed,
        }

        // Only a held left key mirrors the sprite; any other change restores it.
        craft.facing = if pressed && direction == Direction::Left {
            Facing::Left
        } else if pressed || matches!(direction, Direction::Left | Direction::Right) {
            Facing::Right
        } else {
            craft.facing
        };
    }

    /// Integrates one frame of movement and keeps the craft inside `bounds`.
    pub fn tick(&mut self, bounds: BoundsEnvelope) {
        let craft = &mut self.craft;
        craft.position.x = clamp_axis(craft.position.x + craft.velocity.x, bounds.max_x);
        craft.position.y = clamp_axis(craft.position.y + craft.velocity.y, bounds.max_y);
    }

    /// Fires from the craft's nose when the cooldown allows it.
    ///
    /// `on_fired` runs exactly once per successful shot, after the projectile
    /// joins the registry. Returns the new projectile id.
    pub fn fire(
        &self,
        gate: &mut CooldownGate,
        now_ms: u64,
        registry: &mut ProjectileRegistry,
        on_fired: impl FnOnce(&Projectile),
    ) -> Option<u64> {
        if !gate.try_fire(now_ms) {
            return None;
        }

        let projectile = registry.spawn(self.craft.position, self.craft.half_size);
        on_fired(projectile);
        Some(projectile.id)
    }
}

// A viewport smaller than the craft leaves no room on that axis; pin to centre.
fn clamp_axis(value: f32, limit: f32) -> f32 {
    if limit <= 0.0 {
        0.0
    } else {
        value.clamp(-limit, limit)
    }
}
