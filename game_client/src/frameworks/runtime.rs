// Framework bootstrap for the headless game client.

use crate::domain::Viewport;
use crate::domain::ports::RenderSink;
use crate::frameworks::config::{self, RenderMode};
use crate::interface_adapters::assets::FsAssetLoader;
use crate::interface_adapters::audio::LoggingAudioSink;
use crate::interface_adapters::clock::MonotonicClock;
use crate::interface_adapters::input::read_input;
use crate::interface_adapters::render::{JsonLinesRenderer, TracingRenderer};
use crate::use_cases::{
    AssetManifest, GameEvent, GameSession, SessionSettings, frame_task, spawn_asset_loads,
};

use std::{io::Result, sync::Arc};
use tokio::io::BufReader;
use tokio::sync::{Notify, mpsc};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr; stdout may carry JSON frames.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn build_renderer(mode: RenderMode) -> Box<dyn RenderSink + Send> {
    match mode {
        RenderMode::Log => Box::new(TracingRenderer),
        RenderMode::Json => Box::new(JsonLinesRenderer::new(std::io::stdout())),
    }
}

fn session_settings() -> SessionSettings {
    let (width, height) = config::viewport_size();
    let defaults = SessionSettings::default();
    SessionSettings {
        viewport: Viewport::new(width, height).unwrap_or(defaults.viewport),
        ..defaults
    }
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let settings = session_settings();
    let frame_interval = config::frame_interval();
    let render_mode = config::render_mode();
    let asset_dir = config::asset_dir();
    tracing::info!(
        viewport_width = settings.viewport.width,
        viewport_height = settings.viewport.height,
        ?render_mode,
        asset_dir = %asset_dir.display(),
        "starting session"
    );

    // Input, resize and asset completions all reach the frame loop through here.
    let (event_tx, event_rx) = mpsc::channel::<GameEvent>(config::EVENT_CHANNEL_CAPACITY);
    let shutdown = Arc::new(Notify::new());

    // Loads race the first frames; the session copes with empty slots.
    let loader = Arc::new(FsAssetLoader::new(asset_dir));
    spawn_asset_loads(loader, &AssetManifest::default(), event_tx.clone());

    tokio::spawn(read_input(
        BufReader::new(tokio::io::stdin()),
        event_tx,
        shutdown.clone(),
    ));

    let ctrl_c_shutdown = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("interrupt received");
                ctrl_c_shutdown.notify_one();
            }
            // Without a signal handler the `quit` command is the only way out.
            Err(e) => tracing::warn!(error = %e, "failed to listen for interrupt"),
        }
    });

    let session = GameSession::new(
        settings,
        build_renderer(render_mode),
        LoggingAudioSink::new(config::audio_gain()),
    );
    let session = frame_task(
        session,
        MonotonicClock::new(),
        event_rx,
        frame_interval,
        shutdown,
    )
    .await;

    tracing::info!(
        frames = session.frame(),
        live_projectiles = session.projectiles().live_count(),
        sounds_played = session.audio().played(),
        "session ended"
    );
    Ok(())
}
