//! The driver's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it comes from a key press or a
//! programmatic call, is a [`Command`] passed to
//! [`Visualizer::execute`](super::Visualizer::execute).

use crate::sort::{Algorithm, Direction};

/// A driver-level operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Replace the array with fresh random values, abandoning any sort in
    /// progress.
    ResetArray,
    /// Start a sort when idle, otherwise pause or resume the running one.
    ToggleSorting,
    /// Choose the ordering for the next sort. Ignored while busy.
    SetDirection(Direction),
    /// Choose the algorithm for the next sort. Ignored while busy.
    SelectAlgorithm(Algorithm),
}
