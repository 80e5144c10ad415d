use crate::domain::AudioClip;
use crate::domain::ports::AudioSink;
use tracing::info;

/// Stands in for an audio device: every playback becomes a log line.
#[derive(Debug, Clone)]
pub struct LoggingAudioSink {
    gain: f32,
    played: u64,
}

impl LoggingAudioSink {
    pub fn new(gain: f32) -> Self {
        Self {
            gain: gain.clamp(0.0, 1.0),
            played: 0,
        }
    }

    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LoggingAudioSink {
    fn play(&mut self, clip: &AudioClip) {
        self.played += 1;
        info!(
            clip = %clip.path,
            bytes = clip.data.len(),
            gain = self.gain,
            "playing sound"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn when_gain_out_of_range_then_it_is_clamped_and_plays_are_counted() {
        let mut sink = LoggingAudioSink::new(3.0);
        let clip = AudioClip {
            path: Arc::from("sounds/blast.mp3"),
            data: Arc::from(vec![0u8; 16]),
        };

        sink.play(&clip);
        sink.play(&clip);

        assert_eq!(sink.gain, 1.0);
        assert_eq!(sink.played(), 2);
    }
}
