// Line-based keyboard adapter: turns text commands into game events.

use crate::domain::Direction;
use crate::use_cases::{GameEvent, Key};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{Notify, mpsc};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum InputCommand {
    Press(Key),
    Release(Key),
    // Press immediately followed by release.
    Tap(Key),
    Resize { width: f32, height: f32 },
    Quit,
}

impl InputCommand {
    /// Events this command expands to. `Quit` has none; it stops the session.
    pub fn events(&self) -> Vec<GameEvent> {
        match *self {
            InputCommand::Press(key) => vec![GameEvent::KeyDown(key)],
            InputCommand::Release(key) => vec![GameEvent::KeyUp(key)],
            InputCommand::Tap(key) => vec![GameEvent::KeyDown(key), GameEvent::KeyUp(key)],
            InputCommand::Resize { width, height } => vec![GameEvent::Resize { width, height }],
            InputCommand::Quit => Vec::new(),
        }
    }
}

/// Maps browser key codes: arrows, WASD and space.
pub fn key_from_code(code: u32) -> Option<Key> {
    let key = match code {
        38 | 87 => Key::Direction(Direction::Up),
        40 | 83 => Key::Direction(Direction::Down),
        37 | 65 => Key::Direction(Direction::Left),
        39 | 68 => Key::Direction(Direction::Right),
        32 => Key::Fire,
        _ => return None,
    };
    Some(key)
}

pub fn key_from_name(name: &str) -> Option<Key> {
    if let Ok(code) = name.parse::<u32>() {
        return key_from_code(code);
    }

    let key = match name.to_ascii_lowercase().as_str() {
        "up" | "w" | "arrowup" => Key::Direction(Direction::Up),
        "down" | "s" | "arrowdown" => Key::Direction(Direction::Down),
        "left" | "a" | "arrowleft" => Key::Direction(Direction::Left),
        "right" | "d" | "arrowright" => Key::Direction(Direction::Right),
        "fire" | "space" => Key::Fire,
        _ => return None,
    };
    Some(key)
}

/// Parses one command line such as `down left`, `up 37`, `tap space`,
/// `resize 800 600` or `quit`. Returns `None` for anything unrecognised.
pub fn parse_command(line: &str) -> Option<InputCommand> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?.to_ascii_lowercase();

    let command = match verb.as_str() {
        "down" | "press" => InputCommand::Press(key_from_name(parts.next()?)?),
        "up" | "release" => InputCommand::Release(key_from_name(parts.next()?)?),
        "tap" => InputCommand::Tap(key_from_name(parts.next()?)?),
        "resize" => InputCommand::Resize {
            width: parts.next()?.parse().ok()?,
            height: parts.next()?.parse().ok()?,
        },
        "quit" | "exit" => InputCommand::Quit,
        _ => return None,
    };

    // Trailing tokens mean a malformed command.
    if parts.next().is_some() {
        return None;
    }
    Some(command)
}

/// Reads commands until EOF or `quit`, forwarding events to the frame loop.
/// `quit` also signals `shutdown`.
pub async fn read_input<R>(reader: R, events: mpsc::Sender<GameEvent>, shutdown: Arc<Notify>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("input closed");
                return;
            }
            Err(e) => {
                warn!(error = %e, "failed to read input");
                return;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(command) = parse_command(trimmed) else {
            warn!(line = trimmed, "unrecognised input command; ignoring");
            continue;
        };

        if command == InputCommand::Quit {
            info!("quit requested");
            shutdown.notify_one();
            return;
        }

        for event in command.events() {
            debug!(?event, "input event");
            if events.send(event).await.is_err() {
                debug!("frame loop gone; input reader exiting");
                return;
            }
        }
    }
}
