//! Resumable step-sort engines.
//!
//! Every algorithm is an explicit state machine: all loop counters, work
//! queues and scratch buffers live in the engine value, and the array is
//! only borrowed for the duration of a single [`StepSort::advance`] call.
//! One call performs one externally visible mutation (or comparison
//! highlight) and reports which indices to draw and how.
//!
//! Algorithm selection is closed: [`Algorithm`] names the six supported
//! sorts and [`SortEngine`] wraps one live engine of each kind.

mod bubble;
mod heap;
mod highlight;
mod insertion;
mod merge;
mod quick;
mod selection;
pub mod verify;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub use bubble::BubbleSort;
pub use heap::{HeapPhase, HeapSort};
pub use highlight::{HighlightRole, Highlights};
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
use rand::Rng;
use schemars::JsonSchema;
pub use selection::SelectionSort;
use serde::{Deserialize, Serialize};
pub use verify::Verification;

use crate::model::Value;

/// Target ordering of a sort.
///
/// Comparisons behave as if both operands were multiplied by
/// [`sign`](Self::sign), so each engine needs a single comparison.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

impl Direction {
    /// +1 for ascending, -1 for descending.
    #[must_use]
    pub fn sign(self) -> Value {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }

    /// Compare `a` and `b` as `a * sign` against `b * sign`.
    #[must_use]
    pub fn compare(self, a: Value, b: Value) -> Ordering {
        match self {
            Self::Ascending => a.cmp(&b),
            Self::Descending => b.cmp(&a),
        }
    }

    /// `a` belongs strictly before `b`.
    #[must_use]
    pub fn precedes(self, a: Value, b: Value) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// `a` belongs strictly after `b`.
    #[must_use]
    pub fn succeeds(self, a: Value, b: Value) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Whether `values` is already in this order.
    #[must_use]
    pub fn is_sorted(self, values: &[Value]) -> bool {
        values.windows(2).all(|pair| !self.succeeds(pair[0], pair[1]))
    }

    /// Human-readable label used in the title line.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }
}

/// The six supported sorting algorithms.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Adjacent swaps, one swap per step.
    #[default]
    Bubble,
    /// Shift-based insertion, one shift per step.
    Insertion,
    /// Minimum scan, one comparison per step.
    Selection,
    /// Bottom-up merge, one write-back per step.
    Merge,
    /// Random-pivot two-pointer partitioning, one swap per step.
    Quick,
    /// Queue-driven heapify and extraction.
    Heap,
}

impl Algorithm {
    /// Every algorithm, in selector order.
    pub const ALL: [Self; 6] = [
        Self::Insertion,
        Self::Bubble,
        Self::Selection,
        Self::Merge,
        Self::Quick,
        Self::Heap,
    ];

    /// Display name, e.g. "Bubble Sort".
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Selection => "Selection Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Heap => "Heap Sort",
        }
    }

    /// Lowercase identifier, matching the serde and CLI spelling.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.id() == wanted)
            .ok_or_else(|| format!("unknown algorithm: {s}"))
    }
}

/// Result of one [`StepSort::advance`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Step {
    /// Indices to draw highlighted for this step.
    pub highlights: Highlights,
    /// The algorithm has no more steps.
    pub done: bool,
}

impl Step {
    /// A step that mutated or inspected the array.
    pub(crate) fn progress(highlights: Highlights) -> Self {
        Self {
            highlights,
            done: false,
        }
    }

    /// The terminal step: nothing highlighted, nothing changed.
    pub(crate) fn finished() -> Self {
        Self {
            highlights: Highlights::new(),
            done: true,
        }
    }
}

/// A sort that can be suspended after every visible step.
pub trait StepSort {
    /// Perform the next step against `values`.
    ///
    /// `values` must be the same array, unchanged by anyone else, on every
    /// call. Once a step reports `done`, further calls are no-ops that
    /// report `done` again.
    fn advance(&mut self, values: &mut [Value]) -> Step;

    /// Whether a `done` step has been reported.
    fn is_done(&self) -> bool;

    /// Drive the sort to completion, returning the number of non-terminal
    /// steps taken.
    fn finish(&mut self, values: &mut [Value]) -> usize {
        let mut steps = 0;
        while !self.advance(values).done {
            steps += 1;
        }
        steps
    }
}

/// One live engine of any supported algorithm.
#[derive(Debug, Clone)]
pub enum SortEngine {
    /// See [`BubbleSort`].
    Bubble(BubbleSort),
    /// See [`InsertionSort`].
    Insertion(InsertionSort),
    /// See [`SelectionSort`].
    Selection(SelectionSort),
    /// See [`MergeSort`].
    Merge(MergeSort),
    /// See [`QuickSort`].
    Quick(QuickSort),
    /// See [`HeapSort`].
    Heap(HeapSort),
}

impl SortEngine {
    /// Fresh engine for an array of `len` values. `rng` seeds the quick
    /// sort pivot stream and is otherwise unused.
    pub fn new(
        algorithm: Algorithm,
        len: usize,
        direction: Direction,
        rng: &mut impl Rng,
    ) -> Self {
        match algorithm {
            Algorithm::Bubble => Self::Bubble(BubbleSort::new(len, direction)),
            Algorithm::Insertion => {
                Self::Insertion(InsertionSort::new(len, direction))
            }
            Algorithm::Selection => {
                Self::Selection(SelectionSort::new(len, direction))
            }
            Algorithm::Merge => Self::Merge(MergeSort::new(len, direction)),
            Algorithm::Quick => {
                Self::Quick(QuickSort::new(len, direction, rng))
            }
            Algorithm::Heap => Self::Heap(HeapSort::new(len, direction)),
        }
    }

    /// Which algorithm this engine runs.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Bubble(_) => Algorithm::Bubble,
            Self::Insertion(_) => Algorithm::Insertion,
            Self::Selection(_) => Algorithm::Selection,
            Self::Merge(_) => Algorithm::Merge,
            Self::Quick(_) => Algorithm::Quick,
            Self::Heap(_) => Algorithm::Heap,
        }
    }
}

impl StepSort for SortEngine {
    fn advance(&mut self, values: &mut [Value]) -> Step {
        match self {
            Self::Bubble(e) => e.advance(values),
            Self::Insertion(e) => e.advance(values),
            Self::Selection(e) => e.advance(values),
            Self::Merge(e) => e.advance(values),
            Self::Quick(e) => e.advance(values),
            Self::Heap(e) => e.advance(values),
        }
    }

    fn is_done(&self) -> bool {
        match self {
            Self::Bubble(e) => e.is_done(),
            Self::Insertion(e) => e.is_done(),
            Self::Selection(e) => e.is_done(),
            Self::Merge(e) => e.is_done(),
            Self::Quick(e) => e.is_done(),
            Self::Heap(e) => e.is_done(),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;

    use super::*;

    fn engine(algorithm: Algorithm, len: usize, dir: Direction) -> SortEngine {
        SortEngine::new(algorithm, len, dir, &mut StdRng::seed_from_u64(11))
    }

    fn sorted_copy(values: &[Value], dir: Direction) -> Vec<Value> {
        let mut expected = values.to_vec();
        expected.sort_unstable_by(|a, b| dir.compare(*a, *b));
        expected
    }

    #[test]
    fn direction_mirrors_comparisons() {
        assert!(Direction::Ascending.precedes(1, 2));
        assert!(Direction::Descending.precedes(2, 1));
        assert!(!Direction::Descending.succeeds(5, 5));
        assert_eq!(Direction::Descending.sign(), -1);
        assert!(Direction::Descending.is_sorted(&[9, 4, 4, 1]));
        assert!(!Direction::Ascending.is_sorted(&[9, 4, 4, 1]));
    }

    #[test]
    fn algorithm_round_trips_through_id() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.id().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(" Heap ".parse::<Algorithm>(), Ok(Algorithm::Heap));
        assert!("bogo".parse::<Algorithm>().is_err());
    }

    #[test]
    fn engine_reports_its_algorithm() {
        for algorithm in Algorithm::ALL {
            let e = engine(algorithm, 4, Direction::Ascending);
            assert_eq!(e.algorithm(), algorithm);
            assert!(!e.is_done());
        }
    }

    #[test]
    fn every_engine_sorts_a_fixed_input_both_ways() {
        let input = vec![42, 7, 19, 7, 0, 88, 23, 61, 3, 19, 50];
        for algorithm in Algorithm::ALL {
            for dir in [Direction::Ascending, Direction::Descending] {
                let mut values = input.clone();
                let _ = engine(algorithm, values.len(), dir)
                    .finish(&mut values);
                assert_eq!(
                    values,
                    sorted_copy(&input, dir),
                    "{algorithm} {dir:?}"
                );
            }
        }
    }

    #[test]
    fn exhausted_engines_stay_done() {
        for algorithm in Algorithm::ALL {
            let mut values = vec![3, 1, 2];
            let mut e = engine(algorithm, values.len(), Direction::Ascending);
            let _ = e.finish(&mut values);
            assert!(e.is_done());
            let snapshot = values.clone();
            for _ in 0..3 {
                let step = e.advance(&mut values);
                assert!(step.done);
                assert!(step.highlights.is_empty());
            }
            assert_eq!(values, snapshot);
        }
    }

    #[test]
    fn single_element_finishes_immediately() {
        for algorithm in Algorithm::ALL {
            let mut values = vec![1];
            let mut e = engine(algorithm, 1, Direction::Descending);
            assert!(e.advance(&mut values).done, "{algorithm}");
            assert_eq!(values, vec![1]);
        }
    }

    #[test]
    fn inspecting_between_steps_changes_nothing() {
        let input = vec![9, 2, 7, 4, 4, 8, 1, 6, 3, 5];
        for algorithm in Algorithm::ALL {
            let mut straight = input.clone();
            let _ = engine(algorithm, input.len(), Direction::Ascending)
                .finish(&mut straight);

            let mut observed = input.clone();
            let mut snapshots = Vec::new();
            let mut e = engine(algorithm, input.len(), Direction::Ascending);
            while !e.advance(&mut observed).done {
                snapshots.push(observed.clone());
            }
            assert_eq!(straight, observed, "{algorithm}");
            assert_eq!(snapshots.last().unwrap_or(&input), &observed);
        }
    }

    #[test]
    fn step_counts_follow_complexity_class() {
        // Reverse-sorted input: worst case for the quadratic sorts.
        let n = 64;
        let input: Vec<Value> = (0..n).rev().collect();
        let count = |algorithm| {
            let mut values = input.clone();
            engine(algorithm, values.len(), Direction::Ascending)
                .finish(&mut values)
        };
        let quadratic = (n * (n - 1) / 2) as usize;
        assert_eq!(count(Algorithm::Bubble), quadratic);
        assert_eq!(count(Algorithm::Insertion), quadratic);
        assert_eq!(count(Algorithm::Selection), quadratic);

        // n log2 n = 384 write-backs for a power-of-two merge.
        assert_eq!(count(Algorithm::Merge), 384);
        let heap = count(Algorithm::Heap);
        assert!(heap < 4 * 384, "heap took {heap} steps");
    }

    #[test]
    fn quick_sort_swaps_stay_near_n_log_n() {
        let n = 256;
        let mut rng = StdRng::seed_from_u64(29);
        let input: Vec<Value> =
            (0..n).map(|_| rng.random_range(0..1000)).collect();
        for dir in [Direction::Ascending, Direction::Descending] {
            let mut values = input.clone();
            let swaps = engine(Algorithm::Quick, n, dir).finish(&mut values);
            // n * log2(n) = 2048
            assert!(swaps < n * 8, "quick took {swaps} swaps");
            assert_eq!(values, sorted_copy(&input, dir));
        }
    }

    proptest! {
        #[test]
        fn engines_sort_by_permutation(
            input in prop::collection::vec(-50i64..50, 1..40),
            descending in any::<bool>(),
            seed in any::<u64>(),
        ) {
            let dir = if descending {
                Direction::Descending
            } else {
                Direction::Ascending
            };
            for algorithm in Algorithm::ALL {
                let mut values = input.clone();
                let mut e = SortEngine::new(
                    algorithm,
                    values.len(),
                    dir,
                    &mut StdRng::seed_from_u64(seed),
                );
                let _ = e.finish(&mut values);
                prop_assert!(dir.is_sorted(&values), "{} {:?}", algorithm, values);
                prop_assert_eq!(&values, &sorted_copy(&input, dir));
            }
        }

        #[test]
        fn highlights_stay_in_bounds(
            input in prop::collection::vec(0i64..10, 1..24),
        ) {
            for algorithm in Algorithm::ALL {
                let mut values = input.clone();
                let mut e = engine(algorithm, values.len(), Direction::Ascending);
                loop {
                    let step = e.advance(&mut values);
                    prop_assert!(step.highlights.iter().all(|(i, _)| i < input.len()));
                    if step.done {
                        break;
                    }
                }
            }
        }
    }
}
