//! Command dispatch and key handling for [`Visualizer`].

use super::{Command, DriverState, Visualizer};
use crate::model::ArrayModel;

impl Visualizer {
    /// Apply a driver command.
    ///
    /// Direction and algorithm changes are ignored unless the driver is
    /// [`DriverState::Idle`]; the running sort keeps the settings it
    /// started with.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::ResetArray => self.regenerate(),
            Command::ToggleSorting => self.toggle_sorting(),
            Command::SetDirection(direction) => {
                if self.is_busy() {
                    log::debug!(
                        "direction change ignored while {:?}",
                        self.state
                    );
                } else {
                    self.direction = direction;
                    log::info!("direction: {}", direction.label());
                }
            }
            Command::SelectAlgorithm(algorithm) => {
                if self.is_busy() {
                    log::debug!(
                        "algorithm change ignored while {:?}",
                        self.state
                    );
                } else {
                    self.algorithm = algorithm;
                    log::info!("algorithm: {algorithm}");
                }
            }
        }
    }

    /// Execute the command bound to `key`. Returns `false` for unbound
    /// keys.
    pub fn handle_key(&mut self, key: &str) -> bool {
        let Some(action) = self.options.keybindings.lookup(key) else {
            return false;
        };
        self.execute(action.command());
        true
    }

    fn regenerate(&mut self) {
        let array = &self.options.array;
        match ArrayModel::random(
            array.len,
            array.min_value,
            array.max_value,
            &mut self.rng,
        ) {
            Ok(model) => {
                self.model = model;
                self.abandon();
                log::info!("generated {} new values", self.model.len());
            }
            Err(e) => log::error!("array reset failed: {e}"),
        }
    }

    fn toggle_sorting(&mut self) {
        match self.state {
            DriverState::Idle => self.start(),
            DriverState::Sorting => {
                self.state = DriverState::Paused;
                log::info!("paused after {} steps", self.steps);
            }
            DriverState::Paused => {
                self.state = DriverState::Sorting;
                log::info!("resumed");
            }
            DriverState::Verifying => {
                log::debug!("toggle ignored while verifying");
            }
        }
    }

    fn is_busy(&self) -> bool {
        self.state != DriverState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::sort::{Algorithm, Direction};

    fn visualizer() -> Visualizer {
        let mut options = Options::default();
        options.array.seed = Some(11);
        Visualizer::new(options).unwrap()
    }

    #[test]
    fn toggle_cycles_start_pause_resume() {
        let mut viz = visualizer();
        viz.execute(Command::ToggleSorting);
        assert_eq!(viz.state(), DriverState::Sorting);
        viz.execute(Command::ToggleSorting);
        assert_eq!(viz.state(), DriverState::Paused);
        viz.execute(Command::ToggleSorting);
        assert_eq!(viz.state(), DriverState::Sorting);
    }

    #[test]
    fn selection_changes_only_apply_when_idle() {
        let mut viz = visualizer();
        viz.execute(Command::SelectAlgorithm(Algorithm::Heap));
        viz.execute(Command::SetDirection(Direction::Descending));
        assert_eq!(viz.algorithm(), Algorithm::Heap);
        assert_eq!(viz.direction(), Direction::Descending);

        viz.execute(Command::ToggleSorting);
        viz.execute(Command::SelectAlgorithm(Algorithm::Merge));
        viz.execute(Command::SetDirection(Direction::Ascending));
        assert_eq!(viz.algorithm(), Algorithm::Heap);
        assert_eq!(viz.direction(), Direction::Descending);

        viz.execute(Command::ToggleSorting);
        viz.execute(Command::SelectAlgorithm(Algorithm::Merge));
        assert_eq!(viz.algorithm(), Algorithm::Heap);
    }

    #[test]
    fn reset_array_returns_to_idle_with_fresh_values() {
        let mut viz = visualizer();
        viz.execute(Command::ToggleSorting);
        let _ = viz.advance();
        viz.execute(Command::ResetArray);
        assert_eq!(viz.state(), DriverState::Idle);
        assert_eq!(viz.current_array().len(), 32);
        assert_eq!(viz.step_count(), 0);
        assert!(viz.highlights().is_empty());
    }

    #[test]
    fn keys_dispatch_through_bindings() {
        let mut viz = visualizer();
        assert!(viz.handle_key("KeyQ"));
        assert_eq!(viz.algorithm(), Algorithm::Quick);
        assert!(viz.handle_key("KeyD"));
        assert_eq!(viz.direction(), Direction::Descending);
        assert!(viz.handle_key("Space"));
        assert_eq!(viz.state(), DriverState::Sorting);
        assert!(!viz.handle_key("KeyZ"));
    }
}
