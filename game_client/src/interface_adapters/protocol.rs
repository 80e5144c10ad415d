// Wire DTOs for frames handed to an external renderer as JSON lines.

use crate::domain::{BackgroundSnapshot, CraftSnapshot, FrameSnapshot, ProjectileSnapshot};
use serde::Serialize;

/// Messages emitted to the rendering process, one per line.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum RenderMessage {
    // A projectile visual should be created.
    ProjectileSpawned { id: u64 },
    // The projectile left the play field; its visual can be released.
    ProjectileRemoved { id: u64 },
    // Full state for one frame.
    Frame(FrameDto),
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameDto {
    pub frame: u64,
    pub craft: CraftDto,
    pub projectiles: Vec<ProjectileDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projectile_sprite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundDto>,
}

impl From<&FrameSnapshot> for FrameDto {
    fn from(frame: &FrameSnapshot) -> Self {
        Self {
            frame: frame.frame,
            craft: CraftDto::from(&frame.craft),
            projectiles: frame.projectiles.iter().map(ProjectileDto::from).collect(),
            projectile_sprite: frame.projectile_sprite.as_deref().map(str::to_owned),
            background: frame.background.as_ref().map(BackgroundDto::from),
        }
    }
}

/// Flattened craft state; `sprite` is omitted while the texture is loading.
#[derive(Debug, Clone, Serialize)]
pub struct CraftDto {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub scale_x: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
}

impl From<&CraftSnapshot> for CraftDto {
    fn from(craft: &CraftSnapshot) -> Self {
        Self {
            x: craft.position.x,
            y: craft.position.y,
            z: craft.position.z,
            scale_x: craft.scale_x,
            sprite: craft.sprite.as_deref().map(str::to_owned),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileDto {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<&ProjectileSnapshot> for ProjectileDto {
    fn from(projectile: &ProjectileSnapshot) -> Self {
        Self {
            id: projectile.id,
            x: projectile.position.x,
            y: projectile.position.y,
            z: projectile.position.z,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BackgroundDto {
    pub sprite: String,
    pub width: f32,
    pub height: f32,
    pub z: f32,
}

impl From<&BackgroundSnapshot> for BackgroundDto {
    fn from(background: &BackgroundSnapshot) -> Self {
        Self {
            sprite: background.sprite.to_string(),
            width: background.width,
            height: background.height,
            z: background.z,
        }
    }
}
