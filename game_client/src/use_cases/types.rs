// Use-case level inputs for the frame loop.

use crate::domain::{Direction, LoadedAsset};

/// Logical keys the input collaborator can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Direction(Direction),
    Fire,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    KeyDown(Key),
    KeyUp(Key),
    Resize { width: f32, height: f32 },
    AssetLoaded(LoadedAsset),
}
