/// Frame timing and match countdown
///
/// The display drives one simulation step per frame. `FrameClock` measures the
/// wall-clock gap between frames and turns it into a frame-scale factor
/// (elapsed / nominal frame time) used to keep damage rate-independent.
/// `Countdown` ticks the match timer in fixed wall-clock steps, independent of
/// how many frames happen in between.
use std::time::{Duration, Instant};

/// Nominal frame time the simulation constants are tuned for (~60 FPS)
pub const TARGET_FRAME_TIME: Duration = Duration::from_micros(16_670);

/// Upper bound on the frame-scale factor after a long stall
pub const MAX_FRAME_SCALE: f32 = 5.0;

/// Timing information for a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Wall-clock time since the previous frame (zero while paused)
    pub elapsed: Duration,
    /// `elapsed / target`, capped at the clock's maximum
    pub scale: f32,
}

/// Measures the time between display frames
#[derive(Debug)]
pub struct FrameClock {
    target: Duration,
    max_scale: f32,
    last_frame_time: Option<Instant>,
    paused: bool,
    frame_count: u64,
}

impl FrameClock {
    pub fn new(target: Duration, max_scale: f32) -> Self {
        Self {
            target,
            max_scale,
            last_frame_time: None,
            paused: false,
            frame_count: 0,
        }
    }

    /// Begin a new frame at `now`
    ///
    /// The very first frame (and the first frame after a resume) has no
    /// predecessor and is treated as exactly one nominal frame.
    pub fn begin_frame(&mut self, now: Instant) -> FrameTiming {
        self.frame_count += 1;

        if self.paused {
            self.last_frame_time = Some(now);
            return FrameTiming {
                elapsed: Duration::ZERO,
                scale: 0.0,
            };
        }

        let elapsed = match self.last_frame_time {
            Some(last) => now.saturating_duration_since(last),
            None => self.target,
        };
        self.last_frame_time = Some(now);

        FrameTiming {
            elapsed,
            scale: self.scale_for(elapsed),
        }
    }

    /// Frame-scale factor for an arbitrary elapsed time
    ///
    /// This is `elapsed / target` capped at `max_scale`, not the raw ratio: a
    /// stalled frame counts as at most `max_scale` nominal frames.
    pub fn scale_for(&self, elapsed: Duration) -> f32 {
        if self.target.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.target.as_secs_f32()).min(self.max_scale)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Forget the paused gap so the next frame is a nominal one
            self.last_frame_time = None;
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TARGET_FRAME_TIME, MAX_FRAME_SCALE)
    }
}

/// Match timer that decrements in whole steps of a fixed cadence
#[derive(Debug, Clone)]
pub struct Countdown {
    step: Duration,
    steps_remaining: u32,
    accumulator: Duration,
}

impl Countdown {
    /// Create a countdown of `total` length ticking every `step`
    pub fn new(total: Duration, step: Duration) -> Self {
        let step = if step.is_zero() {
            Duration::from_millis(100)
        } else {
            step
        };
        let steps_remaining = (total.as_micros() / step.as_micros()) as u32;
        Self {
            step,
            steps_remaining,
            accumulator: Duration::ZERO,
        }
    }

    /// Feed wall-clock time; returns the number of steps consumed
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.is_expired() {
            return 0;
        }

        self.accumulator += elapsed;
        let mut ticked = 0;
        while self.accumulator >= self.step && self.steps_remaining > 0 {
            self.accumulator -= self.step;
            self.steps_remaining -= 1;
            ticked += 1;
        }
        ticked
    }

    pub fn seconds_remaining(&self) -> f32 {
        self.steps_remaining as f32 * self.step.as_secs_f32()
    }

    /// Whole seconds for display, rounded up
    pub fn display_seconds(&self) -> u32 {
        let step_micros = self.step.as_micros();
        let remaining_micros = self.steps_remaining as u128 * step_micros;
        remaining_micros.div_ceil(1_000_000) as u32
    }

    pub fn is_expired(&self) -> bool {
        self.steps_remaining == 0
    }
}
