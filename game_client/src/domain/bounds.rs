// Screen-space limits for entities, derived from the camera frustum.

use crate::domain::tuning::CameraTuning;

/// Current drawable area in pixels. Replaced wholesale on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Returns a viewport only when both dimensions are finite and positive.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Some(Self { width, height })
        } else {
            None
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Largest absolute x/y an entity centre may take while staying fully visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsEnvelope {
    pub max_x: f32,
    pub max_y: f32,
}

/// Computes the envelope for an entity of `half_size` sitting at `entity_depth`.
///
/// The visible frustum slice at that depth is `2 * tan(fov / 2) * distance` tall
/// and `aspect` times as wide; the entity's half-size is taken off each half-extent.
pub fn compute_bounds(
    half_size: f32,
    viewport: Viewport,
    camera: &CameraTuning,
    entity_depth: f32,
) -> BoundsEnvelope {
    let distance = camera.depth - entity_depth;
    let height = 2.0 * (camera.vertical_fov_radians() / 2.0).tan() * distance;
    let width = height * viewport.aspect();

    BoundsEnvelope {
        max_x: width / 2.0 - half_size,
        max_y: height / 2.0 - half_size,
    }
}
