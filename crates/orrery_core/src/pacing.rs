use std::time::{Duration, Instant};

/// Fixed-rate frame clock. The loop asks [`FramePacer::is_due`], runs one
/// frame, then calls [`FramePacer::advance`] and sleeps until
/// [`FramePacer::next_deadline`].
#[derive(Debug, Clone)]
pub struct FramePacer {
    target_hz: u32,
    dt: Duration,
    next_tick: Instant,
    frames_in_window: u32,
    window_start: Instant,
}

impl FramePacer {
    /// Returns `None` for a zero rate.
    pub fn new_fixed_hz(target_hz: u32, now: Instant) -> Option<Self> {
        if target_hz == 0 {
            return None;
        }
        Some(Self {
            target_hz,
            dt: Duration::from_secs_f64(1.0 / target_hz as f64),
            next_tick: now,
            frames_in_window: 0,
            window_start: now,
        })
    }

    pub fn target_hz(&self) -> u32 {
        self.target_hz
    }

    pub fn frame_interval(&self) -> Duration {
        self.dt
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_tick
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    /// Schedules the next frame. When more than a frame behind, the
    /// schedule restarts from `now` rather than bursting to catch up.
    pub fn advance(&mut self, now: Instant) {
        self.next_tick += self.dt;
        if now > self.next_tick + self.dt {
            self.next_tick = now + self.dt;
        }
    }

    /// Counts a presented frame. Once per second returns the measured rate.
    pub fn record_frame(&mut self, now: Instant) -> Option<f32> {
        self.frames_in_window += 1;
        let window = now.saturating_duration_since(self.window_start);
        if window < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames_in_window as f32 / window.as_secs_f32();
        self.frames_in_window = 0;
        self.window_start = now;
        Some(fps)
    }
}
