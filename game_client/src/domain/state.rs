// Domain-level simulation entities and snapshot types.

use std::sync::Arc;

/// World-space position. Entities keep `z` fixed at their spawn depth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

/// Horizontal orientation of the craft sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Horizontal scale applied to the sprite (-1 mirrors it).
    pub fn scale_x(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

pub struct Craft {
    pub position: Position,
    pub velocity: Velocity,
    pub facing: Facing,
    // Half of the sprite plane; keeps the whole silhouette on screen.
    pub half_size: f32,
}

pub struct Projectile {
    pub id: u64,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CraftSnapshot {
    pub position: Position,
    pub scale_x: f32,
    // None until the craft sprite resolves; the craft is then invisible.
    pub sprite: Option<Arc<str>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileSnapshot {
    pub id: u64,
    pub position: Position,
}

/// Backdrop plane sized from the viewport width and the image aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundSnapshot {
    pub sprite: Arc<str>,
    pub width: f32,
    pub height: f32,
    pub z: f32,
}

/// Everything the rendering collaborator needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub craft: CraftSnapshot,
    pub projectiles: Vec<ProjectileSnapshot>,
    pub projectile_sprite: Option<Arc<str>>,
    pub background: Option<BackgroundSnapshot>,
}

impl From<&Projectile> for ProjectileSnapshot {
    fn from(p: &Projectile) -> Self {
        Self {
            id: p.id,
            position: p.position,
        }
    }
}
