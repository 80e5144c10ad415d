use std::{env, path::PathBuf, time::Duration};

// Runtime constants and env-driven settings (not gameplay tuning).

pub const EVENT_CHANNEL_CAPACITY: usize = 1024;

const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

/// How frames are handed to the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Frames become tracing events.
    Log,
    /// Frames are written to stdout as JSON lines.
    Json,
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

pub fn viewport_size() -> (f32, f32) {
    let positive = |v: &f32| v.is_finite() && *v > 0.0;
    let width = env_parsed("VIEWPORT_WIDTH")
        .filter(positive)
        .unwrap_or(DEFAULT_VIEWPORT_WIDTH);
    let height = env_parsed("VIEWPORT_HEIGHT")
        .filter(positive)
        .unwrap_or(DEFAULT_VIEWPORT_HEIGHT);
    (width, height)
}

pub fn frame_interval() -> Duration {
    let millis = env_parsed::<u64>("FRAME_INTERVAL_MS")
        .filter(|ms| *ms > 0)
        .unwrap_or(16);
    Duration::from_millis(millis)
}

pub fn asset_dir() -> PathBuf {
    env::var("ASSET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("assets"))
}

pub fn audio_gain() -> f32 {
    env_parsed("AUDIO_GAIN").unwrap_or(0.5)
}

pub fn render_mode() -> RenderMode {
    parse_render_mode(env::var("RENDER_MODE").ok().as_deref())
}

fn parse_render_mode(value: Option<&str>) -> RenderMode {
    match value.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("json") => RenderMode::Json,
        _ => RenderMode::Log,
    }
}
