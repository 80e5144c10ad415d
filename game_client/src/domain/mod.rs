// Domain layer: core simulation types and rules.

pub mod assets;
pub mod bounds;
pub mod cooldown;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use assets::{AssetError, AssetKind, AssetSlots, AudioClip, LoadedAsset, SpriteHandle};
pub use bounds::{BoundsEnvelope, Viewport, compute_bounds};
pub use cooldown::CooldownGate;
pub use state::{
    BackgroundSnapshot, Craft, CraftSnapshot, Facing, FrameSnapshot, Position, Projectile,
    ProjectileSnapshot, Velocity,
};
pub use systems::{CraftController, Direction, ProjectileRegistry};
