//! Key-bindable actions and their translation into driver commands.

use serde::{Deserialize, Serialize};

use crate::engine::Command;
use crate::sort::{Algorithm, Direction};

/// Driver-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_sorting = "Space"
/// heap = "KeyH"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Generate a fresh random array and abandon any running sort.
    ResetArray,
    /// Start a sort, or pause/resume the running one.
    ToggleSorting,
    /// Sort smallest first.
    Ascending,
    /// Sort largest first.
    Descending,
    /// Select insertion sort.
    Insertion,
    /// Select bubble sort.
    Bubble,
    /// Select selection sort.
    Selection,
    /// Select merge sort.
    Merge,
    /// Select quick sort.
    Quick,
    /// Select heap sort.
    Heap,
}

impl KeyAction {
    /// The command this action triggers.
    #[must_use]
    pub fn command(self) -> Command {
        match self {
            Self::ResetArray => Command::ResetArray,
            Self::ToggleSorting => Command::ToggleSorting,
            Self::Ascending => Command::SetDirection(Direction::Ascending),
            Self::Descending => Command::SetDirection(Direction::Descending),
            Self::Insertion => Command::SelectAlgorithm(Algorithm::Insertion),
            Self::Bubble => Command::SelectAlgorithm(Algorithm::Bubble),
            Self::Selection => Command::SelectAlgorithm(Algorithm::Selection),
            Self::Merge => Command::SelectAlgorithm(Algorithm::Merge),
            Self::Quick => Command::SelectAlgorithm(Algorithm::Quick),
            Self::Heap => Command::SelectAlgorithm(Algorithm::Heap),
        }
    }

    /// Selector action for `algorithm`.
    #[must_use]
    pub fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Insertion => Self::Insertion,
            Algorithm::Bubble => Self::Bubble,
            Algorithm::Selection => Self::Selection,
            Algorithm::Merge => Self::Merge,
            Algorithm::Quick => Self::Quick,
            Algorithm::Heap => Self::Heap,
        }
    }
}
