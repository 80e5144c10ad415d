// Asset handles and the slots the session reads them from.

use std::fmt;
use std::sync::Arc;

/// Decoded image metadata. Pixel data stays with the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteHandle {
    pub path: Arc<str>,
    pub width: u32,
    pub height: u32,
}

impl SpriteHandle {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Encoded audio bytes, passed as-is to the audio collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub path: Arc<str>,
    pub data: Arc<[u8]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Background,
    CraftSprite,
    ProjectileSprite,
    LaserSound,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::Background => "background",
            AssetKind::CraftSprite => "craft_sprite",
            AssetKind::ProjectileSprite => "projectile_sprite",
            AssetKind::LaserSound => "laser_sound",
        };
        f.write_str(name)
    }
}

/// A resolved asset load, ready to be stored in its slot.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedAsset {
    Background(SpriteHandle),
    CraftSprite(SpriteHandle),
    ProjectileSprite(SpriteHandle),
    LaserSound(AudioClip),
}

impl LoadedAsset {
    pub fn kind(&self) -> AssetKind {
        match self {
            LoadedAsset::Background(_) => AssetKind::Background,
            LoadedAsset::CraftSprite(_) => AssetKind::CraftSprite,
            LoadedAsset::ProjectileSprite(_) => AssetKind::ProjectileSprite,
            LoadedAsset::LaserSound(_) => AssetKind::LaserSound,
        }
    }
}

// Domain-level errors for asset loads. None of them are fatal.
#[derive(Debug)]
pub enum AssetError {
    Io(std::io::Error),
    Decode(image::ImageError),
    Empty,
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io(e) => write!(f, "read failed: {e}"),
            AssetError::Decode(e) => write!(f, "decode failed: {e}"),
            AssetError::Empty => f.write_str("asset file is empty"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io(e) => Some(e),
            AssetError::Decode(e) => Some(e),
            AssetError::Empty => None,
        }
    }
}

impl From<std::io::Error> for AssetError {
    fn from(e: std::io::Error) -> Self {
        AssetError::Io(e)
    }
}

impl From<image::ImageError> for AssetError {
    fn from(e: image::ImageError) -> Self {
        AssetError::Decode(e)
    }
}

/// Nullable slots filled once as loads complete. Every reader must cope with
/// an empty slot because loads race the first frames.
#[derive(Debug, Default)]
pub struct AssetSlots {
    pub background: Option<SpriteHandle>,
    pub craft_sprite: Option<SpriteHandle>,
    pub projectile_sprite: Option<SpriteHandle>,
    pub laser_sound: Option<AudioClip>,
}

impl AssetSlots {
    pub fn store(&mut self, asset: LoadedAsset) {
        match asset {
            LoadedAsset::Background(sprite) => self.background = Some(sprite),
            LoadedAsset::CraftSprite(sprite) => self.craft_sprite = Some(sprite),
            LoadedAsset::ProjectileSprite(sprite) => self.projectile_sprite = Some(sprite),
            LoadedAsset::LaserSound(clip) => self.laser_sound = Some(clip),
        }
    }
}
