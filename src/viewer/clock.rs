use std::time::Instant;

/// Wall-clock time since the end of setup.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    start: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_secs_at(Instant::now())
    }

    /// Saturates to zero for instants before the start.
    pub fn elapsed_secs_at(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.start).as_secs_f32()
    }
}
