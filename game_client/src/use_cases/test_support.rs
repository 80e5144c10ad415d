use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::ports::{AudioSink, Clock, RenderSink};
use crate::domain::{AudioClip, FrameSnapshot, Projectile};

// Renderer fake that keeps every notification for later assertions.
#[derive(Default)]
pub(crate) struct RecordingRenderer {
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
pub(crate) struct RecordingAudio {
    pub played: Vec<String>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, clip: &AudioClip) {
        self.played.push(clip.path.to_string());
    }
}

// Manually advanced time source for deterministic use-case tests.
#[derive(Default)]
pub(crate) struct ManualClock(pub(crate) AtomicU64);

impl ManualClock {
    pub(crate) fn set(&self, now_ms: u64) {
        self.0.store(now_ms, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}
