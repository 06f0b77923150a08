//! Read-only queries and render helpers for [`Visualizer`].

use super::{DriverState, Visualizer};
use crate::layout::{Bar, BarLayout, Header};
use crate::model::ArrayModel;
use crate::options::Options;
use crate::sort::{Algorithm, Direction, Highlights};

// ── State ──

impl Visualizer {
    /// Current driver state.
    #[must_use]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Algorithm used by the next (or running) sort.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Ordering used by the next (or running) sort.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Non-terminal steps taken by the current or last sort.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// Outcome of the last completed verification sweep.
    #[must_use]
    pub fn last_verification(&self) -> Option<bool> {
        self.last_verification
    }

    /// Highlights of the most recent step or sweep frame.
    #[must_use]
    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }

    /// The array and its bounds.
    #[must_use]
    pub fn model(&self) -> &ArrayModel {
        &self.model
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

// ── Rendering ──

impl Visualizer {
    /// Bar geometry for the current array bounds.
    #[must_use]
    pub fn layout(&self) -> BarLayout {
        BarLayout::new(&self.model, &self.options.layout)
    }

    /// Bars for the current array, colored by the latest highlights.
    #[must_use]
    pub fn bars(&self) -> Vec<Bar> {
        self.layout().bars(
            self.model.values(),
            &self.highlights,
            &self.options.colors,
        )
    }

    /// Title, controls and algorithm selector lines.
    #[must_use]
    pub fn header(&self) -> Header {
        Header::new(self.algorithm, self.direction, &self.options.keybindings)
    }

    /// Title line, e.g. "Merge Sort - Descending".
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} - {}", self.algorithm.name(), self.direction.label())
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{Command, Visualizer};
    use crate::options::Options;
    use crate::sort::{Algorithm, Direction};

    #[test]
    fn title_tracks_selection() {
        let mut viz = Visualizer::with_array(Options::default(), vec![1, 2])
            .unwrap();
        assert_eq!(viz.title(), "Bubble Sort - Ascending");
        viz.execute(Command::SelectAlgorithm(Algorithm::Merge));
        viz.execute(Command::SetDirection(Direction::Descending));
        assert_eq!(viz.title(), "Merge Sort - Descending");
        assert_eq!(viz.header().title, viz.title());
    }

    #[test]
    fn one_bar_per_value() {
        let mut viz =
            Visualizer::with_array(Options::default(), vec![3, 1, 2]).unwrap();
        assert_eq!(viz.bars().len(), 3);
        viz.start();
        let _ = viz.advance();
        let bars = viz.bars();
        let colors = &viz.options().colors;
        assert_eq!(bars[0].color, colors.secondary);
        assert_eq!(bars[1].color, colors.primary);
        assert_eq!(bars[2].color, colors.gradients[2]);
    }
}
