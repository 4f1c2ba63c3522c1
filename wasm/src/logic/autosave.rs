/// Tracks when the session was last written so periodic ticks know when to
/// save again.
#[derive(Debug, Clone)]
pub struct AutosaveSchedule {
    interval_ms: f64,
    last_save_ms: f64,
}

impl AutosaveSchedule {
    pub fn new(interval_ms: f64, now_ms: f64) -> Self {
        Self {
            interval_ms,
            last_save_ms: now_ms,
        }
    }

    pub fn is_due(&self, now_ms: f64) -> bool {
        now_ms - self.last_save_ms >= self.interval_ms
    }

    pub fn mark_saved(&mut self, now_ms: f64) {
        self.last_save_ms = now_ms;
    }

    pub fn last_save_ms(&self) -> f64 {
        self.last_save_ms
    }
}
