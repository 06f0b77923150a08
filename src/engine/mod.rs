//! The `Visualizer` driver: owns the array, the active engine and the
//! pacing clock, and turns commands into frames.

mod accessors;
mod command;
mod input;
mod pacing;

use std::collections::VecDeque;

pub use command::Command;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::SortvizError;
use crate::model::{ArrayModel, Value};
use crate::options::Options;
use crate::sort::{
    Algorithm, Direction, Highlights, SortEngine, Step, StepSort,
    Verification,
};
use crate::util::frame_timing::FrameTiming;

/// What the driver is doing between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    /// No engine; commands may change the algorithm and direction.
    #[default]
    Idle,
    /// An engine is live and steps are due on every tick.
    Sorting,
    /// An engine is live but ticks produce nothing.
    Paused,
    /// The sort finished and the sortedness sweep is being played back.
    Verifying,
}

/// Event carried by a [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The engine performed one step.
    Step,
    /// The engine reported completion; verification starts next tick.
    SortFinished,
    /// One frame of the sortedness sweep.
    VerifyStep,
    /// The sweep ended; `true` when every value was in order.
    Verified(bool),
}

/// One paced unit of visible progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Driver state after the frame was produced.
    pub state: DriverState,
    /// Indices to draw highlighted.
    pub highlights: Highlights,
    /// What happened.
    pub signal: Signal,
}

/// Step-driven sorting visualizer.
///
/// The driver holds at most one [`SortEngine`] at a time. Starting a sort
/// creates one; completion or [`reset`](Self::reset) drops it. Rendering
/// is left to the caller: [`tick`](Self::tick) says when something
/// changed and [`bars`](Self::bars) describes what to draw.
#[derive(Debug)]
pub struct Visualizer {
    options: Options,
    model: ArrayModel,
    algorithm: Algorithm,
    direction: Direction,
    engine: Option<SortEngine>,
    /// Remaining sweep frames while verifying.
    verification: VecDeque<Highlights>,
    last_verification: Option<bool>,
    state: DriverState,
    highlights: Highlights,
    timing: FrameTiming,
    rng: StdRng,
    steps: usize,
}

impl Visualizer {
    /// Driver over a random array generated from `options.array`.
    pub fn new(options: Options) -> Result<Self, SortvizError> {
        options.array.validate()?;
        let mut rng = Self::seeded_rng(&options);
        let model = ArrayModel::random(
            options.array.len,
            options.array.min_value,
            options.array.max_value,
            &mut rng,
        )?;
        Ok(Self::assemble(options, model, rng))
    }

    /// Driver over caller-supplied values.
    pub fn with_array(
        options: Options,
        values: Vec<Value>,
    ) -> Result<Self, SortvizError> {
        let model = ArrayModel::new(values)?;
        let rng = Self::seeded_rng(&options);
        Ok(Self::assemble(options, model, rng))
    }

    fn seeded_rng(options: &Options) -> StdRng {
        options
            .array
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    fn assemble(options: Options, model: ArrayModel, rng: StdRng) -> Self {
        log::debug!(
            "visualizer ready: {} values in [{}, {}]",
            model.len(),
            model.min(),
            model.max()
        );
        Self {
            algorithm: options.sort.algorithm,
            direction: options.sort.direction,
            timing: FrameTiming::new(options.timing.steps_per_second),
            options,
            model,
            engine: None,
            verification: VecDeque::new(),
            last_verification: None,
            state: DriverState::Idle,
            highlights: Highlights::new(),
            rng,
            steps: 0,
        }
    }

    /// Replace the options. The current array is kept; the next
    /// [`Command::ResetArray`] uses the new array settings.
    pub fn set_options(
        &mut self,
        mut options: Options,
    ) -> Result<(), SortvizError> {
        options.array.validate()?;
        options.keybindings.rebuild_reverse_map();
        let fps = if self.state == DriverState::Verifying {
            options.timing.verify_frames_per_second
        } else {
            options.timing.steps_per_second
        };
        self.timing.set_target_fps(fps);
        self.options = options;
        Ok(())
    }

    // ── Core contract ──

    /// The array in its current (possibly partially sorted) order.
    #[must_use]
    pub fn current_array(&self) -> &[Value] {
        self.model.values()
    }

    /// Advance the active engine by one step.
    ///
    /// With no active engine this is a no-op reporting `done`. The step
    /// that reports `done` also drops the engine and returns the driver
    /// to [`DriverState::Idle`].
    pub fn advance(&mut self) -> Step {
        let Some(engine) = self.engine.as_mut() else {
            return Step::finished();
        };
        let step = engine.advance(self.model.values_mut());
        if step.done {
            log::debug!(
                "{} ({}) finished after {} steps",
                self.algorithm,
                self.direction.label(),
                self.steps
            );
            self.engine = None;
            self.state = DriverState::Idle;
            self.highlights = Highlights::new();
        } else {
            self.steps += 1;
            log::trace!("step {}: {:?}", self.steps, step.highlights);
            self.highlights = step.highlights.clone();
        }
        step
    }

    /// Replace the array and direction, abandoning any sort in progress.
    pub fn reset(
        &mut self,
        values: Vec<Value>,
        direction: Direction,
    ) -> Result<(), SortvizError> {
        self.model = ArrayModel::new(values)?;
        self.direction = direction;
        self.abandon();
        Ok(())
    }

    /// Lazy sortedness sweep over the current array in the current
    /// direction.
    #[must_use]
    pub fn verify_and_highlight(&self) -> Verification<'_> {
        Verification::new(self.model.values(), self.direction)
    }

    // ── Lifecycle ──

    /// Create a fresh engine for the selected algorithm and direction and
    /// enter [`DriverState::Sorting`]. Any live engine is replaced.
    pub fn start(&mut self) {
        log::debug!(
            "starting {} ({}) over {} values",
            self.algorithm,
            self.direction.label(),
            self.model.len()
        );
        self.engine = Some(SortEngine::new(
            self.algorithm,
            self.model.len(),
            self.direction,
            &mut self.rng,
        ));
        self.steps = 0;
        self.verification.clear();
        self.last_verification = None;
        self.highlights = Highlights::new();
        self.state = DriverState::Sorting;
        self.timing.set_target_fps(self.options.timing.steps_per_second);
    }

    /// Drop the engine and any pending verification frames.
    fn abandon(&mut self) {
        if self.engine.take().is_some() {
            log::debug!(
                "abandoned {} after {} steps",
                self.algorithm,
                self.steps
            );
        }
        self.verification.clear();
        self.last_verification = None;
        self.highlights = Highlights::new();
        self.state = DriverState::Idle;
        self.steps = 0;
        self.timing.set_target_fps(self.options.timing.steps_per_second);
    }
}
