//! Post-sort sortedness sweep.
//!
//! After an engine reports completion, the driver walks the array once
//! from the left, lighting each index as it is checked. The sweep stops
//! early at the first out-of-order value; that truncation is the only
//! signal of a failed sort. Nothing is raised.

use std::iter::FusedIterator;

use super::{Direction, HighlightRole, Highlights};
use crate::model::Value;

/// Lazy, single-use sequence of cumulative highlight maps.
///
/// Checked indices stay [`HighlightRole::Primary`]; the index under
/// inspection is [`HighlightRole::Secondary`]. The last map yielded is the
/// final picture: fully primary when sorted, or ending in the secondary
/// index that broke the order.
#[derive(Debug, Clone)]
pub struct Verification<'a> {
    values: &'a [Value],
    direction: Direction,
    highlights: Highlights,
    /// Largest (sign-adjusted) value accepted so far.
    last: Value,
    /// Index shown as secondary and awaiting its verdict.
    pending: Option<usize>,
    next: usize,
    failed_at: Option<usize>,
    finished: bool,
}

impl<'a> Verification<'a> {
    /// Sweep over `values` in `direction`.
    #[must_use]
    pub fn new(values: &'a [Value], direction: Direction) -> Self {
        let mut highlights = Highlights::new();
        let last = values.first().copied().unwrap_or_default();
        if !values.is_empty() {
            highlights.set(0, HighlightRole::Primary);
        }
        Self {
            values,
            direction,
            highlights,
            last,
            pending: None,
            next: 1,
            failed_at: None,
            finished: values.is_empty(),
        }
    }

    /// Index of the first out-of-order value, once the sweep found one.
    #[must_use]
    pub fn failed_at(&self) -> Option<usize> {
        self.failed_at
    }

    /// Whether the sweep has yielded its final map.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consume the sweep and report whether every value was in order.
    #[must_use]
    pub fn run(mut self) -> bool {
        for _ in self.by_ref() {}
        self.failed_at.is_none()
    }
}

impl Iterator for Verification<'_> {
    type Item = Highlights;

    fn next(&mut self) -> Option<Highlights> {
        if self.finished {
            return None;
        }

        if let Some(index) = self.pending.take() {
            let value = self.values[index];
            if self.direction.precedes(value, self.last) {
                log::warn!(
                    "verification stopped at index {index}: {value} is out \
                     of order"
                );
                self.failed_at = Some(index);
                self.finished = true;
                return Some(self.highlights.clone());
            }
            self.last = value;
            self.highlights.set(index, HighlightRole::Primary);
        }

        if self.next < self.values.len() {
            let index = self.next;
            self.next += 1;
            self.highlights.set(index, HighlightRole::Secondary);
            self.pending = Some(index);
        } else {
            self.finished = true;
        }
        Some(self.highlights.clone())
    }
}

impl FusedIterator for Verification<'_> {}
