/// Perspective camera looking down -z at the play field.

#[derive(Debug, Clone, Copy)]
pub struct CameraTuning {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,

    /// Camera position on the z axis.
    pub depth: f32,
}

impl CameraTuning {
    pub fn vertical_fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            depth: 5.0,
        }
    }
}
