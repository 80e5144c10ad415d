// Use cases layer: session workflows around the simulation core.

pub mod assets;
pub mod game;
pub mod session;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use assets::{AssetManifest, spawn_asset_loads};
pub use game::frame_task;
pub use session::{GameSession, SessionSettings};
pub use types::{GameEvent, Key};
