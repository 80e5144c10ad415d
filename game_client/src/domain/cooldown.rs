/// Permits an action at most once per fixed interval.
///
/// The gate never reads a clock; callers pass non-decreasing millisecond
/// timestamps so the behaviour is deterministic under test.
#[derive(Debug, Clone)]
pub struct CooldownGate {
    interval_ms: u64,
    last_fire_ms: Option<u64>,
}

impl CooldownGate {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fire_ms: None,
        }
    }

    /// Returns true and records `now_ms` when more than `interval_ms` passed
    /// since the last successful call. Leaves the state untouched otherwise.
    pub fn try_fire(&mut self, now_ms: u64) -> bool {
        let ready = match self.last_fire_ms {
            None => true,
            // A timestamp older than the last shot counts as zero elapsed.
            Some(last) => now_ms.saturating_sub(last) > self.interval_ms,
        };

        if ready {
            self.last_fire_ms = Some(now_ms);
        }
        ready
    }

    pub fn last_fire_ms(&self) -> Option<u64> {
        self.last_fire_ms
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}
