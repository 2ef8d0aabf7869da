//! Scroll-seek: placeholder rows during fast scrolling.
//!
//! Velocity is sampled from successive scroll offsets. The mode is entered
//! when |velocity| exceeds the enter threshold and left once it drops below
//! the (lower) exit threshold, so speeds inside the band never toggle it.

use super::options::ScrollSeekConfig;
use std::time::{Duration, Instant};
use tracing::trace;

/// Without a new sample for this long, the list is considered at rest.
pub const IDLE_RESET: Duration = Duration::from_millis(150);

/// Shortest interval used when two samples share a timestamp.
const MIN_SAMPLE_INTERVAL: f64 = 0.001;

/// Velocity sampler plus hysteresis state machine.
#[derive(Debug, Clone)]
pub struct ScrollSeek {
    config: ScrollSeekConfig,
    active: bool,
    velocity: f64,
    last_sample: Option<(usize, Instant)>,
}

impl ScrollSeek {
    /// Resting detector for the given band.
    pub fn new(config: ScrollSeekConfig) -> Self {
        Self {
            config,
            active: false,
            velocity: 0.0,
            last_sample: None,
        }
    }

    /// Whether placeholders should currently replace item content.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last measured velocity in lines per second (signed).
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Record the scroll offset observed at `now`.
    ///
    /// The first sample after [`IDLE_RESET`] of rest measures nothing: a
    /// single step from rest is never fast scrolling.
    pub fn observe(&mut self, offset: usize, now: Instant) -> bool {
        if let Some((prev_offset, prev_time)) = self.last_sample {
            let gap = now.saturating_duration_since(prev_time);
            self.velocity = if gap >= IDLE_RESET {
                0.0
            } else {
                let elapsed = gap.as_secs_f64().max(MIN_SAMPLE_INTERVAL);
                (offset as f64 - prev_offset as f64) / elapsed
            };
        }
        self.last_sample = Some((offset, now));
        self.apply_velocity()
    }

    /// Feed a direct velocity measurement (lines per second).
    pub fn observe_velocity(&mut self, velocity: f64) -> bool {
        self.velocity = velocity;
        self.apply_velocity()
    }

    /// Decay to rest if no sample arrived within [`IDLE_RESET`].
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some((_, last)) = self.last_sample {
            if now.saturating_duration_since(last) >= IDLE_RESET {
                self.velocity = 0.0;
                self.apply_velocity();
            }
        }
        self.active
    }

    fn apply_velocity(&mut self) -> bool {
        let speed = self.velocity.abs();
        let was_active = self.active;
        if !self.active && speed > self.config.enter() {
            self.active = true;
        } else if self.active && speed < self.config.exit() {
            self.active = false;
        }
        if was_active != self.active {
            trace!(velocity = self.velocity, active = self.active, "Scroll-seek transition");
        }
        self.active
    }
}
