//! Frame pacing: turns wall-clock time into paced steps and sweep frames.

use std::collections::VecDeque;

use web_time::{Duration, Instant};

use super::{DriverState, Frame, Signal, Visualizer};
use crate::sort::Highlights;

impl Visualizer {
    /// Produce the next frame if one is due at `now`.
    ///
    /// While sorting, each frame is one engine step at
    /// `timing.steps_per_second`. When the engine finishes, the
    /// sortedness sweep is played back at
    /// `timing.verify_frames_per_second`, ending in a
    /// [`Signal::Verified`] frame and a return to idle. Idle and paused
    /// drivers never produce frames.
    ///
    /// ```ignore
    /// while let Some(wait) = viz.time_until_next_frame(Instant::now()) {
    ///     sleep(wait);
    ///     if let Some(frame) = viz.tick(Instant::now()) {
    ///         draw(&viz.bars());
    ///     }
    /// }
    /// ```
    pub fn tick(&mut self, now: Instant) -> Option<Frame> {
        if !self.timing.should_render(now) {
            return None;
        }
        let signal = match self.state {
            DriverState::Idle | DriverState::Paused => return None,
            DriverState::Sorting => {
                if self.advance().done {
                    self.begin_verification();
                    Signal::SortFinished
                } else {
                    Signal::Step
                }
            }
            DriverState::Verifying => self.next_verification_frame(),
        };
        self.timing.end_frame(now);
        Some(Frame {
            state: self.state,
            highlights: self.highlights.clone(),
            signal,
        })
    }

    /// Time until [`tick`](Self::tick) will next produce a frame, or
    /// `None` when the driver is idle or paused.
    #[must_use]
    pub fn time_until_next_frame(&self, now: Instant) -> Option<Duration> {
        match self.state {
            DriverState::Sorting | DriverState::Verifying => {
                Some(self.timing.time_until_next(now))
            }
            DriverState::Idle | DriverState::Paused => None,
        }
    }

    /// Measured frame rate, smoothed.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    fn begin_verification(&mut self) {
        let mut sweep = self.verify_and_highlight();
        let frames: VecDeque<Highlights> = sweep.by_ref().collect();
        let sorted = sweep.failed_at().is_none();
        log::debug!("verification queued: {} frames", frames.len());
        self.verification = frames;
        self.last_verification = Some(sorted);
        self.state = DriverState::Verifying;
        self.timing
            .set_target_fps(self.options.timing.verify_frames_per_second);
    }

    fn next_verification_frame(&mut self) -> Signal {
        if let Some(highlights) = self.verification.pop_front() {
            self.highlights = highlights;
        }
        if !self.verification.is_empty() {
            return Signal::VerifyStep;
        }
        let sorted = self.last_verification.unwrap_or(false);
        if sorted {
            log::info!(
                "{} sorted {} values in {} steps",
                self.algorithm,
                self.model.len(),
                self.steps
            );
        } else {
            log::warn!("{} left the array out of order", self.algorithm);
        }
        self.state = DriverState::Idle;
        self.timing.set_target_fps(self.options.timing.steps_per_second);
        Signal::Verified(sorted)
    }
}
