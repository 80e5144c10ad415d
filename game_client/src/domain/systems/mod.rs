// Per-frame simulation systems.

pub mod craft;
pub mod projectiles;

pub use craft::{CraftController, Direction};
pub use projectiles::ProjectileRegistry;
