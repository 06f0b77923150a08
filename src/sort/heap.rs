//! Heap sort driven by a FIFO queue of sift-down work.

use std::collections::VecDeque;

use super::{Direction, HighlightRole, Highlights, Step, StepSort};
use crate::model::Value;

/// Which half of the sort the engine is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapPhase {
    /// Building the heap over the whole array.
    Heapify,
    /// Moving the root behind the shrinking heap bound.
    Extract,
}

/// Stepping heap sort.
///
/// Every inspection of a parent against its children is a step, and so
/// is every swap that follows one. Indices whose children all lie outside
/// the heap bound are dropped from the queue without a step.
#[derive(Debug, Clone)]
pub struct HeapSort {
    direction: Direction,
    phase: HeapPhase,
    /// Exclusive heap bound.
    finish: usize,
    queue: VecDeque<usize>,
    /// Swap decided by the last inspection, applied on the next call.
    pending: Option<PendingSwap>,
    done: bool,
}

#[derive(Debug, Clone)]
struct PendingSwap {
    parent: usize,
    child: usize,
    highlights: Highlights,
}

impl HeapSort {
    /// Engine for an array of `len` values.
    #[must_use]
    pub fn new(len: usize, direction: Direction) -> Self {
        Self {
            direction,
            phase: HeapPhase::Heapify,
            finish: len,
            queue: (0..=len / 2).rev().collect(),
            pending: None,
            done: false,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> HeapPhase {
        self.phase
    }

    /// Exclusive bound of the heap region.
    #[must_use]
    pub fn heap_len(&self) -> usize {
        self.finish
    }

    /// Compare `parent` with its children and queue a swap if one wins.
    fn inspect(&mut self, values: &[Value], parent: usize) -> Option<Step> {
        let left = 2 * parent + 1;
        let right = left + 1;
        if left >= self.finish {
            return None;
        }

        let mut highlights = Highlights::new()
            .with(parent, HighlightRole::Primary)
            .with(left, HighlightRole::Anchor);
        let here = values[parent];
        let left_value = values[left];
        let right_value = if right < self.finish {
            highlights.set(right, HighlightRole::Anchor);
            values[right]
        } else {
            here
        };

        let child = if self.direction.succeeds(left_value, right_value) {
            left
        } else {
            right
        };
        let child_value = if child == left { left_value } else { right_value };
        if self.direction.succeeds(child_value, here) {
            let mut swap_highlights = highlights.clone();
            swap_highlights.set(child, HighlightRole::Primary);
            swap_highlights.set(parent, HighlightRole::Anchor);
            self.pending = Some(PendingSwap {
                parent,
                child,
                highlights: swap_highlights,
            });
        }
        Some(Step::progress(highlights))
    }
}

impl StepSort for HeapSort {
    fn advance(&mut self, values: &mut [Value]) -> Step {
        if self.done {
            return Step::finished();
        }
        if let Some(swap) = self.pending.take() {
            values.swap(swap.parent, swap.child);
            self.queue.push_back(swap.child);
            return Step::progress(swap.highlights);
        }
        while let Some(parent) = self.queue.pop_front() {
            if let Some(step) = self.inspect(values, parent) {
                return step;
            }
        }

        if self.phase == HeapPhase::Heapify {
            self.phase = HeapPhase::Extract;
            log::trace!("heap built over {} values", self.finish);
        }
        if self.finish <= 1 {
            self.done = true;
            return Step::finished();
        }

        let last = self.finish - 1;
        values.swap(0, last);
        self.finish = last;
        self.queue.push_back(0);
        Step::progress(
            Highlights::new()
                .with(0, HighlightRole::Secondary)
                .with(last, HighlightRole::Primary),
        )
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_heap(values: &[Value], len: usize, direction: Direction) -> bool {
        (1..len).all(|i| !direction.succeeds(values[i], values[(i - 1) / 2]))
    }

    #[test]
    fn single_value_is_done_without_swaps() {
        let mut values = vec![1];
        let mut sort = HeapSort::new(1, Direction::Ascending);
        let step = sort.advance(&mut values);
        assert!(step.done);
        assert!(step.highlights.is_empty());
    }

    #[test]
    fn first_extraction_moves_the_maximum_last() {
        let mut values = vec![3, 9, 2, 7, 1, 8, 6, 5, 4];
        let len = values.len();
        let mut sort = HeapSort::new(len, Direction::Ascending);
        while sort.phase() == HeapPhase::Heapify {
            let _ = sort.advance(&mut values);
        }
        // The first extraction swap has already happened.
        assert_eq!(values[len - 1], 9);
        assert_eq!(sort.heap_len(), len - 1);
        let _ = sort.finish(&mut values);
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn inspection_then_swap_steps() {
        let mut values = vec![1, 5, 3];
        let mut sort = HeapSort::new(values.len(), Direction::Ascending);

        // Index 1 is a leaf and is skipped; index 0 is inspected.
        let step = sort.advance(&mut values);
        assert_eq!(step.highlights.role(0), Some(HighlightRole::Primary));
        assert_eq!(step.highlights.role(1), Some(HighlightRole::Anchor));
        assert_eq!(step.highlights.role(2), Some(HighlightRole::Anchor));
        assert_eq!(values, vec![1, 5, 3]);

        let step = sort.advance(&mut values);
        assert_eq!(values, vec![5, 1, 3]);
        assert_eq!(step.highlights.role(1), Some(HighlightRole::Primary));
        assert_eq!(step.highlights.role(0), Some(HighlightRole::Anchor));
        assert!(is_heap(&values, 3, Direction::Ascending));
    }

    #[test]
    fn extraction_swap_highlights_root_and_bound() {
        let mut values = vec![2, 1];
        let mut sort = HeapSort::new(values.len(), Direction::Ascending);
        let step = sort.advance(&mut values); // inspect 0, no swap
        assert!(!step.done);
        let step = sort.advance(&mut values);
        assert_eq!(sort.phase(), HeapPhase::Extract);
        assert_eq!(step.highlights.role(0), Some(HighlightRole::Secondary));
        assert_eq!(step.highlights.role(1), Some(HighlightRole::Primary));
        assert_eq!(values, vec![1, 2]);
        assert!(sort.advance(&mut values).done);
    }

    #[test]
    fn equal_children_prefer_the_right() {
        let mut values = vec![0, 4, 4];
        let mut sort = HeapSort::new(values.len(), Direction::Ascending);
        let _ = sort.advance(&mut values);
        let _ = sort.advance(&mut values);
        assert_eq!(values, vec![4, 4, 0]);
    }

    #[test]
    fn descending_builds_a_min_heap() {
        let mut values = vec![4, 8, 1, 6, 2, 9];
        let len = values.len();
        let mut sort = HeapSort::new(len, Direction::Descending);
        while sort.phase() == HeapPhase::Heapify {
            let _ = sort.advance(&mut values);
        }
        // Only the root was disturbed by the first extraction.
        assert_eq!(values[len - 1], 1);
        assert!((3..sort.heap_len()).all(|i| {
            !Direction::Descending.succeeds(values[i], values[(i - 1) / 2])
        }));
        let _ = sort.finish(&mut values);
        assert_eq!(values, vec![9, 8, 6, 4, 2, 1]);
    }
}
