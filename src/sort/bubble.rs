//! Bubble sort, one adjacent swap per step.

use super::{Direction, HighlightRole, Highlights, Step, StepSort};
use crate::model::Value;

/// Stepping bubble sort.
///
/// Comparisons that leave the pair in place are not steps; a call keeps
/// comparing until it performs a swap or runs out of pairs.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    direction: Direction,
    len: usize,
    /// Completed outer passes.
    pass: usize,
    /// Left index of the next pair to compare.
    next: usize,
    done: bool,
}

impl BubbleSort {
    /// Engine for an array of `len` values.
    #[must_use]
    pub fn new(len: usize, direction: Direction) -> Self {
        Self {
            direction,
            len,
            pass: 0,
            next: 0,
            done: false,
        }
    }

    /// Number of completed outer passes.
    #[must_use]
    pub fn pass(&self) -> usize {
        self.pass
    }
}

impl StepSort for BubbleSort {
    fn advance(&mut self, values: &mut [Value]) -> Step {
        if self.done {
            return Step::finished();
        }
        while self.pass + 1 < self.len {
            while self.next + 1 < self.len - self.pass {
                let j = self.next;
                self.next += 1;
                if self.direction.succeeds(values[j], values[j + 1]) {
                    values.swap(j, j + 1);
                    return Step::progress(
                        Highlights::new()
                            .with(j, HighlightRole::Secondary)
                            .with(j + 1, HighlightRole::Primary),
                    );
                }
            }
            self.next = 0;
            self.pass += 1;
        }
        self.done = true;
        log::trace!("bubble sort finished after {} passes", self.pass);
        Step::finished()
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
