// File-system asset loader.

use crate::domain::ports::AssetLoader;
use crate::domain::{AssetError, AudioClip, SpriteHandle};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Loads assets relative to `root`. Images are decoded to read their size;
/// audio is kept encoded.
#[derive(Debug, Clone)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>, AssetError> {
        let bytes = tokio::fs::read(self.root.join(path)).await?;
        if bytes.is_empty() {
            return Err(AssetError::Empty);
        }
        Ok(bytes)
    }
}

fn handle_path(path: &Path) -> Arc<str> {
    Arc::from(&*path.to_string_lossy())
}

#[async_trait]
impl AssetLoader for FsAssetLoader {
    async fn load_image(&self, path: &Path) -> Result<SpriteHandle, AssetError> {
        let bytes = self.read(path).await?;
        let image = image::load_from_memory(&bytes)?;

        debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "image decoded"
        );
        Ok(SpriteHandle {
            path: handle_path(path),
            width: image.width(),
            height: image.height(),
        })
    }

    async fn load_audio(&self, path: &Path) -> Result<AudioClip, AssetError> {
        let bytes = self.read(path).await?;

        debug!(path = %path.display(), bytes = bytes.len(), "audio buffered");
        Ok(AudioClip {
            path: handle_path(path),
            data: Arc::from(bytes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    // Fresh scratch directory per test so parallel tests never collide.
    fn scratch_dir() -> PathBuf {
        static NEXT: AtomicU32 = AtomicU32::new(0);
        let dir = std::env::temp_dir().join(format!(
            "game_client_assets_{}_{}",
            std::process::id(),
            NEXT.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::create_dir_all(dir.join("images")).expect("create scratch dir");
        dir
    }

    #[tokio::test]
    async fn when_png_exists_then_dimensions_are_read() {
        let dir = scratch_dir();
        image::RgbaImage::new(4, 2)
            .save(dir.join("images/ship.png"))
            .expect("write png");
        let loader = FsAssetLoader::new(&dir);

        let sprite = loader
            .load_image(Path::new("images/ship.png"))
            .await
            .expect("image loads");

        assert_eq!(sprite.width, 4);
        assert_eq!(sprite.height, 2);
        assert_eq!(&*sprite.path, "images/ship.png");
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn when_file_is_missing_then_io_error_is_returned() {
        let dir = scratch_dir();
        let loader = FsAssetLoader::new(&dir);

        let result = loader.load_image(Path::new("images/nope.png")).await;

        assert!(matches!(result, Err(AssetError::Io(_))));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn when_file_is_empty_or_garbage_then_load_fails() {
        let dir = scratch_dir();
        std::fs::write(dir.join("empty.mp3"), b"").expect("write empty");
        std::fs::write(dir.join("junk.png"), b"not a png").expect("write junk");
        let loader = FsAssetLoader::new(&dir);

        let empty = loader.load_audio(Path::new("empty.mp3")).await;
        let junk = loader.load_image(Path::new("junk.png")).await;

        assert!(matches!(empty, Err(AssetError::Empty)));
        assert!(matches!(junk, Err(AssetError::Decode(_))));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn when_audio_exists_then_bytes_are_kept_verbatim() {
        let dir = scratch_dir();
        std::fs::write(dir.join("blast.mp3"), [1u8, 2, 3, 4]).expect("write audio");
        let loader = FsAssetLoader::new(&dir);

        let clip = loader
            .load_audio(Path::new("blast.mp3"))
            .await
            .expect("audio loads");

        assert_eq!(&*clip.data, &[1u8, 2, 3, 4]);
        let _ = std::fs::remove_dir_all(dir);
    }
}
