//! Step pacing with FPS smoothing.

use web_time::{Duration, Instant};

/// Step pacing with FPS calculation and optional rate limiting.
///
/// Callers pass `now` explicitly so the driver can be stepped from tests
/// without sleeping.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self {
            target_fps,
            min_frame_duration: Self::frame_duration_for(target_fps),
            last_frame: None,
            smoothed_fps: target_fps as f32,
            smoothing: 0.05,
        }
    }

    fn frame_duration_for(target_fps: u32) -> Duration {
        if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        }
    }

    /// Change the FPS target without resetting the last frame time.
    pub fn set_target_fps(&mut self, target_fps: u32) {
        self.target_fps = target_fps;
        self.min_frame_duration = Self::frame_duration_for(target_fps);
    }

    /// Current FPS target (0 = unlimited).
    #[must_use]
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Whether enough time has passed since the last frame.
    #[must_use]
    pub fn should_render(&self, now: Instant) -> bool {
        self.time_until_next(now).is_zero()
    }

    /// How long until the next frame is due (zero when it already is).
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Duration {
        match self.last_frame {
            Some(last) if self.target_fps > 0 => self
                .min_frame_duration
                .saturating_sub(now.saturating_duration_since(last)),
            _ => Duration::ZERO,
        }
    }

    /// Call after producing a frame to update timing.
    pub fn end_frame(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            let frame_time = now.saturating_duration_since(last).as_secs_f32();
            if frame_time > 0.0 {
                let instant_fps = 1.0 / frame_time;
                // Exponential moving average for smooth display
                self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                    + instant_fps * self.smoothing;
            }
        }
        self.last_frame = Some(now);
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
