//! Iterative quick sort over an explicit range stack, one swap per step.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Direction, HighlightRole, Highlights, Step, StepSort};
use crate::model::Value;

/// Partition state for one `[start, finish]` range.
#[derive(Debug, Clone)]
struct Partition {
    start: usize,
    finish: usize,
    /// Pivot value, read once when the partition begins.
    pivot: Value,
    i: usize,
    j: usize,
}

impl Partition {
    /// Move the pointers to the next inversion and swap it.
    fn next_swap(
        &mut self,
        values: &mut [Value],
        direction: Direction,
    ) -> Option<Highlights> {
        let pivot = self.pivot;
        while self.i < self.j {
            while self.i < self.j && !direction.succeeds(values[self.i], pivot)
            {
                self.i += 1;
            }
            while self.i < self.j && direction.succeeds(values[self.j], pivot)
            {
                self.j -= 1;
            }
            if self.i < self.j
                && direction.succeeds(values[self.i], pivot)
                && !direction.succeeds(values[self.j], pivot)
            {
                values.swap(self.i, self.j);
                let highlights = Highlights::new()
                    .with(self.i, HighlightRole::Primary)
                    .with(self.j, HighlightRole::Secondary);
                self.i += 1;
                self.j -= 1;
                return Some(highlights);
            }
        }
        None
    }

    /// Push the sub-ranges left after partitioning.
    ///
    /// The left range is skipped when the whole partitioned range equals
    /// the pivot, otherwise an all-duplicate range would be pushed forever.
    fn split(
        &self,
        values: &[Value],
        direction: Direction,
        stack: &mut Vec<(usize, usize)>,
    ) {
        let mut i = self.i;
        while i <= self.finish && !direction.succeeds(values[i], self.pivot) {
            i += 1;
        }
        let uniform = values[self.start..=self.finish]
            .iter()
            .all(|&v| v == self.pivot);
        if i > self.start + 1 && !uniform {
            stack.push((self.start, i - 1));
        }
        if self.finish > i {
            stack.push((i, self.finish));
        }
    }
}

/// Stepping quick sort with a uniformly random pivot per range.
///
/// Pointer movement that does not end in a swap is not a step.
#[derive(Debug, Clone)]
pub struct QuickSort {
    direction: Direction,
    stack: Vec<(usize, usize)>,
    partition: Option<Partition>,
    rng: StdRng,
    done: bool,
}

impl QuickSort {
    /// Engine for an array of `len` values; pivots are drawn from a stream
    /// seeded from `rng`.
    pub fn new(len: usize, direction: Direction, rng: &mut impl Rng) -> Self {
        let stack = if len > 0 { vec![(0, len - 1)] } else { Vec::new() };
        Self {
            direction,
            stack,
            partition: None,
            rng: StdRng::from_rng(rng),
            done: false,
        }
    }

    /// Ranges still waiting to be partitioned.
    #[must_use]
    pub fn pending_ranges(&self) -> usize {
        self.stack.len()
    }

    fn begin(&mut self, values: &[Value], start: usize, finish: usize) {
        let pivot = values[self.rng.random_range(start..=finish)];
        self.partition = Some(Partition {
            start,
            finish,
            pivot,
            i: start,
            j: finish,
        });
    }
}

impl StepSort for QuickSort {
    fn advance(&mut self, values: &mut [Value]) -> Step {
        if self.done {
            return Step::finished();
        }
        loop {
            if let Some(partition) = &mut self.partition {
                if let Some(highlights) =
                    partition.next_swap(values, self.direction)
                {
                    return Step::progress(highlights);
                }
                partition.split(values, self.direction, &mut self.stack);
                self.partition = None;
            }

            match self.stack.pop() {
                Some((start, finish)) => self.begin(values, start, finish),
                None => {
                    self.done = true;
                    return Step::finished();
                }
            }
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick(len: usize, direction: Direction, seed: u64) -> QuickSort {
        QuickSort::new(len, direction, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn all_duplicates_terminate() {
        for direction in [Direction::Ascending, Direction::Descending] {
            let mut values = vec![2, 2, 2];
            let mut sort = quick(values.len(), direction, 1);
            assert_eq!(sort.finish(&mut values), 0);
            assert!(sort.is_done());
            assert_eq!(sort.pending_ranges(), 0);
        }
    }

    #[test]
    fn duplicate_heavy_input_terminates() {
        let mut values = vec![3, 1, 3, 3, 1, 3, 1, 1, 3, 3, 3, 1];
        let mut sort = quick(values.len(), Direction::Ascending, 5);
        let _ = sort.finish(&mut values);
        assert_eq!(values, vec![1, 1, 1, 1, 1, 3, 3, 3, 3, 3, 3, 3]);
    }

    #[test]
    fn swap_highlights_the_two_pointers() {
        let mut values = vec![9, 1];
        // Whichever pivot is drawn, the only possible swap is (0, 1).
        let mut sort = quick(values.len(), Direction::Ascending, 0);
        let step = sort.advance(&mut values);
        if !step.done {
            assert_eq!(step.highlights.role(0), Some(HighlightRole::Primary));
            assert_eq!(step.highlights.role(1), Some(HighlightRole::Secondary));
        }
        let _ = sort.finish(&mut values);
        assert_eq!(values, vec![1, 9]);
    }

    #[test]
    fn same_seed_same_steps() {
        let input = vec![5, 8, 1, 9, 3, 3, 7, 2, 6, 4];
        let trace = |seed| {
            let mut values = input.clone();
            let mut sort = quick(values.len(), Direction::Descending, seed);
            let mut steps = Vec::new();
            loop {
                let step = sort.advance(&mut values);
                if step.done {
                    break;
                }
                steps.push(step.highlights.indices_with(HighlightRole::Primary));
            }
            (steps, values)
        };
        assert_eq!(trace(42), trace(42));
        assert_eq!(trace(42).1, vec![9, 8, 7, 6, 5, 4, 3, 3, 2, 1]);
    }

    #[test]
    fn empty_array_is_done() {
        let mut values: Vec<Value> = Vec::new();
        assert!(quick(0, Direction::Ascending, 0).advance(&mut values).done);
    }
}
