use std::path::Path;

use async_trait::async_trait;

use crate::domain::assets::{AssetError, AudioClip, SpriteHandle};
use crate::domain::state::{FrameSnapshot, Projectile};

// Port for the rendering collaborator.
pub trait RenderSink {
    fn projectile_spawned(&mut self, projectile: &Projectile);
    // Lets the renderer release whatever it allocated for the projectile.
    fn projectile_removed(&mut self, projectile: &Projectile);
    fn present(&mut self, frame: &FrameSnapshot);
}

impl<R: RenderSink + ?Sized> RenderSink for Box<R> {
    fn projectile_spawned(&mut self, projectile: &Projectile) {
        (**self).projectile_spawned(projectile);
    }

    fn projectile_removed(&mut self, projectile: &Projectile) {
        (**self).projectile_removed(projectile);
    }

    fn present(&mut self, frame: &FrameSnapshot) {
        (**self).present(frame);
    }
}

// Port for one-shot sound playback.
pub trait AudioSink {
    fn play(&mut self, clip: &AudioClip);
}

// Port for retrieving monotonic time in milliseconds.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

// Port for fetching and decoding assets from storage.
#[async_trait]
pub trait AssetLoader: Send + Sync {
    async fn load_image(&self, path: &Path) -> Result<SpriteHandle, AssetError>;
    async fn load_audio(&self, path: &Path) -> Result<AudioClip, AssetError>;
}
