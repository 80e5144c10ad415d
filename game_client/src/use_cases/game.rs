use crate::domain::ports::{AudioSink, Clock, RenderSink};
use crate::use_cases::session::GameSession;
use crate::use_cases::types::GameEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, mpsc};
use tokio::time::MissedTickBehavior;
use tracing::info;

/// Drives the session once per frame until `shutdown` fires, then hands it back.
///
/// Events queued since the previous frame are applied before the frame runs,
/// so input never lands in the middle of a projectile advance.
pub async fn frame_task<R, A, C>(
    mut session: GameSession<R, A>,
    clock: C,
    mut event_rx: mpsc::Receiver<GameEvent>,
    frame_interval: Duration,
    shutdown: Arc<Notify>,
) -> GameSession<R, A>
where
    R: RenderSink,
    A: AudioSink,
    C: Clock,
{
    let mut interval = tokio::time::interval(frame_interval);
    // A late frame is dropped rather than replayed in a burst.
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(
        frame_interval_ms = frame_interval.as_millis() as u64,
        "frame loop started"
    );

    loop {
        tokio::select! {
            biased;
            _ = shutdown.notified() => {
                break;
            }
            _ = interval.tick() => {}
        }

        while let Ok(event) = event_rx.try_recv() {
            session.handle_event(event, clock.now_millis());
        }

        session.tick();
    }

    info!(frames = session.frame(), "frame loop stopped");
    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;
    use crate::use_cases::session::SessionSettings;
    use crate::use_cases::test_support::{ManualClock, RecordingAudio, RecordingRenderer};
    use crate::use_cases::types::Key;

    const FRAME: Duration = Duration::from_millis(16);

    fn session() -> GameSession<RecordingRenderer, RecordingAudio> {
        GameSession::new(
            SessionSettings::default(),
            RecordingRenderer::default(),
            RecordingAudio::default(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn when_events_queued_before_start_then_first_frame_sees_them() {
        let (event_tx, event_rx) = mpsc::channel(16);
        let shutdown = Arc::new(Notify::new());
        event_tx
            .send(GameEvent::KeyDown(Key::Direction(Direction::Right)))
            .await
            .expect("send key");
        event_tx
            .send(GameEvent::KeyDown(Key::Fire))
            .await
            .expect("send fire");

        let handle = tokio::spawn(frame_task(
            session(),
            ManualClock::default(),
            event_rx,
            FRAME,
            shutdown.clone(),
        ));
        tokio::time::sleep(Duration::from_millis(100)).await;
        shutdown.notify_one();
        let session = handle.await.expect("frame task panicked");

        assert!(session.frame() >= 1);
        assert_eq!(session.renderer().frames.len() as u64, session.frame());
        let first = &session.renderer().frames[0];
        assert!(first.craft.position.x > 0.0);
        assert_eq!(first.projectiles.len(), 1);
        assert_eq!(session.renderer().spawned, vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn when_shutdown_already_signalled_then_no_frame_runs() {
        let (_event_tx, event_rx) = mpsc::channel(16);
        let shutdown = Arc::new(Notify::new());
        shutdown.notify_one();

        let session = frame_task(
            session(),
            ManualClock::default(),
            event_rx,
            FRAME,
            shutdown,
        )
        .await;

        assert_eq!(session.frame(), 0);
        assert!(session.renderer().frames.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn when_fire_repeats_across_frames_then_clock_drives_cooldown() {
        let (event_tx, event_rx) = mpsc::channel(16);
        let shutdown = Arc::new(Notify::new());
        let clock = Arc::new(ManualClock::default());

        let handle = tokio::spawn(frame_task(
            session(),
            clock.clone(),
            event_rx,
            FRAME,
            shutdown.clone(),
        ));

        for now_ms in [0, 200, 600] {
            clock.set(now_ms);
            event_tx
                .send(GameEvent::KeyDown(Key::Fire))
                .await
                .expect("send fire");
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        shutdown.notify_one();
        let session = handle.await.expect("frame task panicked");

        assert_eq!(session.renderer().spawned, vec![1, 2]);
        assert_eq!(session.cooldown().last_fire_ms(), Some(600));
    }
}
