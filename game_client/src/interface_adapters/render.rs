// Headless rendering adapters.

use crate::domain::ports::RenderSink;
use crate::domain::{FrameSnapshot, Projectile};
use crate::interface_adapters::protocol::{FrameDto, RenderMessage};
use std::io::Write;
use tracing::{debug, error, trace};

/// Reports frames as tracing events instead of drawing them.
#[derive(Debug, Default)]
pub struct TracingRenderer;

impl RenderSink for TracingRenderer {
    fn projectile_spawned(&mut self, projectile: &Projectile) {
        debug!(projectile_id = projectile.id, "projectile visual added");
    }

    fn projectile_removed(&mut self, projectile: &Projectile) {
        debug!(projectile_id = projectile.id, "projectile visual released");
    }

    fn present(&mut self, frame: &FrameSnapshot) {
        trace!(
            frame = frame.frame,
            craft_x = frame.craft.position.x,
            craft_y = frame.craft.position.y,
            scale_x = frame.craft.scale_x,
            craft_visible = frame.craft.sprite.is_some(),
            projectiles = frame.projectiles.len(),
            "frame"
        );
    }
}

/// Writes one JSON `RenderMessage` per line for an external presenter.
pub struct JsonLinesRenderer<W> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, message: &RenderMessage) {
        let result = serde_json::to_writer(&mut self.out, message)
            .map_err(std::io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"))
            .and_then(|()| self.out.flush());

        // A broken pipe must not stop the frame loop; drop the message.
        if let Err(e) = result {
            error!(error = %e, "failed to write render message");
        }
    }
}

impl<W: Write> RenderSink for JsonLinesRenderer<W> {
    fn projectile_spawned(&mut self, projectile: &Projectile) {
        self.emit(&RenderMessage::ProjectileSpawned { id: projectile.id });
    }

    fn projectile_removed(&mut self, projectile: &Projectile) {
        self.emit(&RenderMessage::ProjectileRemoved { id: projectile.id });
    }

    fn present(&mut self, frame: &FrameSnapshot) {
        self.emit(&RenderMessage::Frame(FrameDto::from(frame)));
    }
}
