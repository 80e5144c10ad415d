// Session context: every piece of mutable game state, owned in one place.

use crate::domain::ports::{AudioSink, RenderSink};
use crate::domain::tuning::{CameraTuning, CraftTuning, ProjectileTuning};
use crate::domain::{
    AssetSlots, BackgroundSnapshot, CooldownGate, Craft, CraftController, CraftSnapshot,
    FrameSnapshot, ProjectileRegistry, ProjectileSnapshot, Viewport, compute_bounds,
};
use crate::use_cases::types::{GameEvent, Key};
use tracing::{debug, info, trace, warn};

// The backdrop sits well behind the play field.
const BACKGROUND_DEPTH: f32 = -10.0;

/// Settings captured once at session start.
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub craft: CraftTuning,
    pub projectile: ProjectileTuning,
    pub camera: CameraTuning,
    /// Initial viewport; replaced by resize events.
    pub viewport: Viewport,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            craft: CraftTuning::default(),
            projectile: ProjectileTuning::default(),
            camera: CameraTuning::default(),
            viewport: Viewport {
                width: 1280.0,
                height: 720.0,
            },
        }
    }
}

pub struct GameSession<R, A> {
    controller: CraftController,
    projectiles: ProjectileRegistry,
    cooldown: CooldownGate,
    assets: AssetSlots,
    camera: CameraTuning,
    viewport: Viewport,
    frame: u64,
    renderer: R,
    audio: A,
}

impl<R, A> GameSession<R, A>
where
    R: RenderSink,
    A: AudioSink,
{
    pub fn new(settings: SessionSettings, renderer: R, audio: A) -> Self {
        Self {
            controller: CraftController::new(settings.craft),
            projectiles: ProjectileRegistry::new(settings.projectile),
            cooldown: CooldownGate::new(settings.projectile.cooldown_ms),
            assets: AssetSlots::default(),
            camera: settings.camera,
            viewport: settings.viewport,
            frame: 0,
            renderer,
            audio,
        }
    }

    /// Applies one event delivered between frames.
    pub fn handle_event(&mut self, event: GameEvent, now_ms: u64) {
        match event {
            GameEvent::KeyDown(Key::Direction(direction)) => {
                self.controller.on_directional_input(direction, true);
            }
            GameEvent::KeyUp(Key::Direction(direction)) => {
                self.controller.on_directional_input(direction, false);
            }
            GameEvent::KeyDown(Key::Fire) => {
                self.fire(now_ms);
            }
            GameEvent::KeyUp(Key::Fire) => {}
            GameEvent::Resize { width, height } => match Viewport::new(width, height) {
                Some(viewport) => {
                    debug!(width, height, "viewport resized");
                    self.viewport = viewport;
                }
                None => warn!(width, height, "ignoring invalid viewport size"),
            },
            GameEvent::AssetLoaded(asset) => {
                info!(asset = %asset.kind(), "asset ready");
                self.assets.store(asset);
            }
        }
    }

    /// Fires a projectile if the cooldown allows, playing the laser sound once.
    pub fn fire(&mut self, now_ms: u64) -> Option<u64> {
        let renderer = &mut self.renderer;
        let audio = &mut self.audio;
        let clip = self.assets.laser_sound.as_ref();

        let fired = self.controller.fire(
            &mut self.cooldown,
            now_ms,
            &mut self.projectiles,
            |projectile| {
                renderer.projectile_spawned(projectile);
                match clip {
                    Some(clip) => audio.play(clip),
                    None => debug!("laser sound not loaded; playing nothing"),
                }
            },
        );

        match fired {
            Some(projectile_id) => debug!(projectile_id, now_ms, "projectile fired"),
            None => trace!(
                now_ms,
                cooldown_ms = self.cooldown.interval_ms(),
                "fire held back by cooldown"
            ),
        }
        fired
    }

    /// Runs one frame: move the craft, advance projectiles, present.
    ///
    /// Bounds are recomputed from the current viewport every frame since a
    /// resize may have landed since the last one.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.frame += 1;

        let craft = self.controller.craft();
        let bounds = compute_bounds(
            craft.half_size,
            self.viewport,
            &self.camera,
            craft.position.z,
        );
        self.controller.tick(bounds);

        let right_edge = self.right_edge();
        let renderer = &mut self.renderer;
        self.projectiles.advance(right_edge, |projectile| {
            trace!(projectile_id = projectile.id, "projectile left the play field");
            renderer.projectile_removed(projectile);
        });

        let frame = self.snapshot();
        self.renderer.present(&frame);
        frame
    }

    /// World-space x past which projectiles are dropped: the visible
    /// half-width at the craft's depth.
    pub fn right_edge(&self) -> f32 {
        let depth = self.controller.craft().position.z;
        compute_bounds(0.0, self.viewport, &self.camera, depth).max_x
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let craft = self.controller.craft();
        FrameSnapshot {
            frame: self.frame,
            craft: CraftSnapshot {
                position: craft.position,
                scale_x: craft.facing.scale_x(),
                sprite: self.assets.craft_sprite.as_ref().map(|s| s.path.clone()),
            },
            projectiles: self
                .projectiles
                .iter()
                .map(ProjectileSnapshot::from)
                .collect(),
            projectile_sprite: self
                .assets
                .projectile_sprite
                .as_ref()
                .map(|s| s.path.clone()),
            background: self.assets.background.as_ref().map(|bg| BackgroundSnapshot {
                sprite: bg.path.clone(),
                width: self.viewport.width,
                height: self.viewport.width / bg.aspect(),
                z: BACKGROUND_DEPTH,
            }),
        }
    }

    pub fn craft(&self) -> &Craft {
        self.controller.craft()
    }

    pub fn projectiles(&self) -> &ProjectileRegistry {
        &self.projectiles
    }

    pub fn cooldown(&self) -> &CooldownGate {
        &self.cooldown
    }

    pub fn assets(&self) -> &AssetSlots {
        &self.assets
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
