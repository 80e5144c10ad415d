/// Gameplay tuning for projectiles (laser bolts).

#[derive(Debug, Clone, Copy)]
pub struct ProjectileTuning {
    /// Forward (+x) distance travelled per frame, in world units.
    pub speed: f32,

    /// Gap between the craft's right edge and a fresh projectile.
    pub spawn_offset: f32,

    /// Minimum time between two shots, in milliseconds.
    pub cooldown_ms: u64,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 0.2,
            spawn_offset: 0.1,
            cooldown_ms: 500,
        }
    }
}
