// Gameplay tuning, kept apart from runtime configuration (frame rate, channel sizes).

pub mod camera;
pub mod craft;
pub mod projectile;

pub use camera::CameraTuning;
pub use craft::CraftTuning;
pub use projectile::ProjectileTuning;
