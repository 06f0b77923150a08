//! Insertion sort, one shift per step.

use super::{Direction, HighlightRole, Highlights, Step, StepSort};
use crate::model::Value;

/// Stepping insertion sort.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    direction: Direction,
    len: usize,
    /// Next outer index to pick up.
    next: usize,
    /// Value being inserted and its current slot.
    held: Option<(Value, usize)>,
    done: bool,
}

impl InsertionSort {
    /// Engine for an array of `len` values.
    #[must_use]
    pub fn new(len: usize, direction: Direction) -> Self {
        Self {
            direction,
            len,
            next: 1,
            held: None,
            done: false,
        }
    }
}

impl StepSort for InsertionSort {
    fn advance(&mut self, values: &mut [Value]) -> Step {
        if self.done {
            return Step::finished();
        }
        loop {
            if let Some((current, cursor)) = self.held {
                if cursor > 0
                    && self.direction.succeeds(values[cursor - 1], current)
                {
                    let cursor = cursor - 1;
                    values[cursor + 1] = values[cursor];
                    values[cursor] = current;
                    self.held = Some((current, cursor));

                    let mut highlights =
                        Highlights::new().with(cursor, HighlightRole::Primary);
                    if let Some(before) = cursor.checked_sub(1) {
                        highlights.set(before, HighlightRole::Secondary);
                    }
                    return Step::progress(highlights);
                }
                self.held = None;
            }

            if self.next >= self.len {
                self.done = true;
                return Step::finished();
            }
            self.held = Some((values[self.next], self.next));
            self.next += 1;
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
