//! Bottom-up merge sort, one write-back per step.

use super::{Direction, HighlightRole, Highlights, Step, StepSort};
use crate::model::Value;

/// One in-progress merge of `[lo, mid]` and `(mid, hi]`.
#[derive(Debug, Clone)]
struct Merge {
    lo: usize,
    mid: usize,
    left: Vec<Value>,
    right: Vec<Value>,
    i: usize,
    j: usize,
    k: usize,
}

impl Merge {
    fn new(values: &[Value], lo: usize, mid: usize, hi: usize) -> Self {
        Self {
            lo,
            mid,
            left: values[lo..=mid].to_vec(),
            right: values[mid + 1..=hi].to_vec(),
            i: 0,
            j: 0,
            k: lo,
        }
    }

    /// Write the next merged value back, or `None` once both runs drain.
    fn write_next(
        &mut self,
        values: &mut [Value],
        direction: Direction,
    ) -> Option<Highlights> {
        let take_left = match (self.left.get(self.i), self.right.get(self.j))
        {
            (Some(&l), Some(&r)) => !direction.succeeds(l, r),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return None,
        };
        let source = if take_left {
            values[self.k] = self.left[self.i];
            self.i += 1;
            self.lo + self.i - 1
        } else {
            values[self.k] = self.right[self.j];
            self.j += 1;
            self.mid + self.j
        };
        let highlights = Highlights::new()
            .with(source, HighlightRole::Secondary)
            .with(self.k, HighlightRole::Primary)
            .with(self.mid, HighlightRole::Anchor);
        self.k += 1;
        Some(highlights)
    }
}

/// Stepping bottom-up merge sort.
///
/// Runs of `width` are merged pairwise left to right, then `width`
/// doubles. A trailing run shorter than `width` is clamped to the array.
#[derive(Debug, Clone)]
pub struct MergeSort {
    direction: Direction,
    len: usize,
    width: usize,
    /// Left boundary of the next pair of runs in this pass.
    next: usize,
    merge: Option<Merge>,
    done: bool,
}

impl MergeSort {
    /// Engine for an array of `len` values.
    #[must_use]
    pub fn new(len: usize, direction: Direction) -> Self {
        Self {
            direction,
            len,
            width: 1,
            next: 0,
            merge: None,
            done: false,
        }
    }

    /// Current run width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }
}

impl StepSort for MergeSort {
    fn advance(&mut self, values: &mut [Value]) -> Step {
        if self.done {
            return Step::finished();
        }
        loop {
            if let Some(merge) = &mut self.merge {
                if let Some(highlights) =
                    merge.write_next(values, self.direction)
                {
                    return Step::progress(highlights);
                }
                self.merge = None;
            }

            if self.width >= self.len {
                self.done = true;
                return Step::finished();
            }
            if self.next >= self.len {
                self.width *= 2;
                self.next = 0;
                log::trace!("merge sort widened runs to {}", self.width);
                continue;
            }

            let lo = self.next;
            let mid = (lo + self.width - 1).min(self.len - 1);
            let hi = (lo + 2 * self.width - 1).min(self.len - 1);
            self.merge = Some(Merge::new(values, lo, mid, hi));
            self.next += 2 * self.width;
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
