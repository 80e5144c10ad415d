/// Gameplay tuning for the player-controlled craft.

#[derive(Debug, Clone, Copy)]
pub struct CraftTuning {
    /// Distance moved per frame while a direction key is held, in world units.
    pub move_speed: f32,

    /// Half of the square sprite plane, in world units.
    pub half_size: f32,

    /// Fixed depth of the craft plane.
    pub depth: f32,
}

impl Default for CraftTuning {
    fn default() -> Self {
        Self {
            move_speed: 0.05,
            half_size: 0.25,
            depth: 0.0,
        }
    }
}
