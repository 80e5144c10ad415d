// Background asset loading that feeds results into the frame loop.

use crate::domain::ports::AssetLoader;
use crate::domain::{AssetError, AssetKind, LoadedAsset};
use crate::use_cases::types::GameEvent;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Where each asset lives, relative to the loader's root.
#[derive(Debug, Clone)]
pub struct AssetManifest {
    pub background: PathBuf,
    pub craft_sprite: PathBuf,
    pub projectile_sprite: PathBuf,
    pub laser_sound: PathBuf,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            background: PathBuf::from("images/bg.png"),
            craft_sprite: PathBuf::from("images/spaceship.png"),
            projectile_sprite: PathBuf::from("laser.png"),
            laser_sound: PathBuf::from("sounds/blast.mp3"),
        }
    }
}

impl AssetManifest {
    pub fn entries(&self) -> [(AssetKind, &Path); 4] {
        [
            (AssetKind::Background, self.background.as_path()),
            (AssetKind::CraftSprite, self.craft_sprite.as_path()),
            (AssetKind::ProjectileSprite, self.projectile_sprite.as_path()),
            (AssetKind::LaserSound, self.laser_sound.as_path()),
        ]
    }
}

/// Starts one task per manifest entry. Each task either sends a single
/// `AssetLoaded` event or logs the failure; loads are never retried.
pub fn spawn_asset_loads<L>(
    loader: Arc<L>,
    manifest: &AssetManifest,
    events: mpsc::Sender<GameEvent>,
) -> Vec<JoinHandle<()>>
where
    L: AssetLoader + ?Sized + 'static,
{
    manifest
        .entries()
        .into_iter()
        .map(|(kind, path)| {
            let loader = loader.clone();
            let events = events.clone();
            let path = path.to_path_buf();

            tokio::spawn(async move {
                match load(loader.as_ref(), kind, &path).await {
                    Ok(asset) => {
                        if events.send(GameEvent::AssetLoaded(asset)).await.is_err() {
                            debug!(asset = %kind, "session closed before asset arrived");
                        }
                    }
                    Err(e) => {
                        warn!(asset = %kind, path = %path.display(), error = %e, "asset load failed");
                    }
                }
            })
        })
        .collect()
}

async fn load<L>(loader: &L, kind: AssetKind, path: &Path) -> Result<LoadedAsset, AssetError>
where
    L: AssetLoader + ?Sized,
{
    let asset = match kind {
        AssetKind::Background => LoadedAsset::Background(loader.load_image(path).await?),
        AssetKind::CraftSprite => LoadedAsset::CraftSprite(loader.load_image(path).await?),
        AssetKind::ProjectileSprite => {
            LoadedAsset::ProjectileSprite(loader.load_image(path).await?)
        }
        AssetKind::LaserSound => LoadedAsset::LaserSound(loader.load_audio(path).await?),
    };
    Ok(asset)
}
