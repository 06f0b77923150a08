//! Selection sort, one comparison per step.

use super::{Direction, HighlightRole, Highlights, Step, StepSort};
use crate::model::Value;

/// Stepping selection sort.
///
/// Each step shows the scanned index against the best candidate so far.
/// The swap that closes a scan happens silently in the same call as the
/// scan's last comparison, so the terminal call never moves data.
#[derive(Debug, Clone)]
pub struct SelectionSort {
    direction: Direction,
    len: usize,
    start: usize,
    scan: usize,
    best: usize,
    done: bool,
}

impl SelectionSort {
    /// Engine for an array of `len` values.
    #[must_use]
    pub fn new(len: usize, direction: Direction) -> Self {
        Self {
            direction,
            len,
            start: 0,
            scan: 1,
            best: 0,
            done: false,
        }
    }
}

impl SelectionSort {
    /// Move the best candidate into place and begin the next scan.
    fn close_scan(&mut self, values: &mut [Value]) {
        values.swap(self.start, self.best);
        self.start += 1;
        self.best = self.start;
        self.scan = self.start + 1;
    }
}

impl StepSort for SelectionSort {
    fn advance(&mut self, values: &mut [Value]) -> Step {
        if self.done {
            return Step::finished();
        }
        while self.start < self.len {
            if self.scan < self.len {
                let index = self.scan;
                self.scan += 1;
                let highlights = Highlights::new()
                    .with(index, HighlightRole::Secondary)
                    .with(self.best, HighlightRole::Primary);
                if self.direction.precedes(values[index], values[self.best]) {
                    self.best = index;
                }
                if self.scan == self.len {
                    self.close_scan(values);
                }
                return Step::progress(highlights);
            }
            self.close_scan(values);
        }
        self.done = true;
        Step::finished()
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_shows_incumbent_before_update() {
        let mut values = vec![3, 1, 2];
        let mut sort = SelectionSort::new(values.len(), Direction::Ascending);

        let step = sort.advance(&mut values);
        assert_eq!(step.highlights.role(1), Some(HighlightRole::Secondary));
        assert_eq!(step.highlights.role(0), Some(HighlightRole::Primary));

        // 1 became the minimum on the previous step. This is the last
        // comparison for start=0, so the swap lands in the same call.
        let step = sort.advance(&mut values);
        assert_eq!(step.highlights.role(2), Some(HighlightRole::Secondary));
        assert_eq!(step.highlights.role(1), Some(HighlightRole::Primary));
        assert_eq!(values, vec![1, 3, 2]);

        let _ = sort.advance(&mut values);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn terminal_call_leaves_values_alone() {
        let mut values = vec![9, 2, 7, 4, 4, 8, 1, 6, 3, 5];
        let mut sort = SelectionSort::new(values.len(), Direction::Ascending);
        let mut before_done = values.clone();
        loop {
            let snapshot = values.clone();
            if sort.advance(&mut values).done {
                assert_eq!(values, snapshot);
                break;
            }
            before_done = values.clone();
        }
        assert_eq!(before_done, vec![1, 2, 3, 4, 4, 5, 6, 7, 8, 9]);
        assert_eq!(values, before_done);
    }

    #[test]
    fn step_count_is_independent_of_order() {
        for input in [vec![1, 2, 3, 4, 5], vec![5, 4, 3, 2, 1]] {
            let mut values = input;
            let mut sort =
                SelectionSort::new(values.len(), Direction::Ascending);
            assert_eq!(sort.finish(&mut values), 10);
            assert_eq!(values, vec![1, 2, 3, 4, 5]);
        }
    }
}
