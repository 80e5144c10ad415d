// Shared fakes and fixtures for the integration tests.
#![allow(dead_code)]

use game_client::domain::ports::{AudioSink, Clock, RenderSink};
use game_client::domain::{AudioClip, FrameSnapshot, Projectile};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Default)]
pub struct RecordingRenderer {
    pub spawned: Vec<u64>,
    pub removed: Vec<u64>,
    pub frames: Vec<FrameSnapshot>,
}

impl RenderSink for RecordingRenderer {
    fn projectile_spawned(&mut self, projectile: &Projectile) {
        self.spawned.push(projectile.id);
    }

    fn projectile_removed(&mut self, projectile: &Projectile) {
        self.removed.push(projectile.id);
    }

    fn present(&mut self, frame: &FrameSnapshot) {
        self.frames.push(frame.clone());
    }
}

#[derive(Default)]
pub struct RecordingAudio {
    pub played: Vec<String>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, clip: &AudioClip) {
        self.played.push(clip.path.to_string());
    }
}

// Clock pinned to one instant; every fire sees the same timestamp.
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

// Empty scratch directory unique to this process and call.
pub fn scratch_dir(label: &str) -> PathBuf {
    static NEXT: AtomicU32 = AtomicU32::new(0);
    let dir = std::env::temp_dir().join(format!(
        "game_client_{label}_{}_{}",
        std::process::id(),
        NEXT.fetch_add(1, Ordering::Relaxed)
    ));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

// Lays out the default asset manifest under a fresh scratch directory.
pub fn asset_dir_with_everything() -> PathBuf {
    let dir = scratch_dir("assets");
    std::fs::create_dir_all(dir.join("images")).expect("create images dir");
    std::fs::create_dir_all(dir.join("sounds")).expect("create sounds dir");

    image::RgbaImage::new(200, 100)
        .save(dir.join("images/bg.png"))
        .expect("write background");
    image::RgbaImage::new(8, 8)
        .save(dir.join("images/spaceship.png"))
        .expect("write spaceship");
    image::RgbaImage::new(10, 1)
        .save(dir.join("laser.png"))
        .expect("write laser");
    std::fs::write(dir.join("sounds/blast.mp3"), [0xFFu8, 0xFB, 0x90, 0x00]).expect("write sound");
    dir
}
