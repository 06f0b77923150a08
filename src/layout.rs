//! Bar-chart geometry, bar colors and header text for the current frame.
//!
//! Everything here is plain data: a renderer only has to fill the
//! rectangles and draw the three header strings.

use crate::input::KeyAction;
use crate::model::{ArrayModel, Value};
use crate::options::{ColorOptions, KeybindingOptions, LayoutOptions, Rgb};
use crate::sort::{Algorithm, Direction, Highlights};

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: i64,
    /// Top edge.
    pub y: i64,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// One filled bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    /// Bar extent; the bottom edge is the canvas bottom.
    pub rect: Rect,
    /// Fill color.
    pub color: Rgb,
}

/// Pixel metrics derived from the array bounds and the canvas options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLayout {
    start_x: i64,
    block_width: u32,
    block_height: i64,
    canvas_height: i64,
    min: Value,
    plot: Rect,
}

impl BarLayout {
    /// Layout for `model` on a canvas described by `options`.
    #[must_use]
    pub fn new(model: &ArrayModel, options: &LayoutOptions) -> Self {
        let usable_width = options.width.saturating_sub(options.side_pad);
        let usable_height = options.height.saturating_sub(options.top_pad);
        let block_width =
            (f64::from(usable_width) / model.len().max(1) as f64).round() as u32;
        // A flat array still gets one block of height per unit.
        let span = model.max().saturating_sub(model.min()).max(1);
        let block_height = i64::from(usable_height) / span;

        let start_x = i64::from(options.side_pad / 2);
        Self {
            start_x,
            block_width,
            block_height,
            canvas_height: i64::from(options.height),
            min: model.min(),
            plot: Rect {
                x: start_x,
                y: i64::from(options.top_pad),
                width: usable_width,
                height: usable_height,
            },
        }
    }

    /// Region the bars are drawn in; renderers clear it between steps.
    #[must_use]
    pub fn plot_area(&self) -> Rect {
        self.plot
    }

    /// Width of every bar.
    #[must_use]
    pub fn block_width(&self) -> u32 {
        self.block_width
    }

    /// Pixels per unit of value.
    #[must_use]
    pub fn block_height(&self) -> i64 {
        self.block_height
    }

    /// Extent of the bar for `value` at `index`.
    #[must_use]
    pub fn bar_rect(&self, index: usize, value: Value) -> Rect {
        let x = self.start_x + index as i64 * i64::from(self.block_width);
        let units = value.saturating_sub(self.min).saturating_add(1);
        let y = self
            .canvas_height
            .saturating_sub(units.saturating_mul(self.block_height));
        let height = self.canvas_height.saturating_sub(y).max(0);
        Rect {
            x,
            y,
            width: self.block_width,
            height: u32::try_from(height).unwrap_or(u32::MAX),
        }
    }

    /// Bars for `values`, colored by highlight role or the resting
    /// gradient.
    #[must_use]
    pub fn bars(
        &self,
        values: &[Value],
        highlights: &Highlights,
        colors: &ColorOptions,
    ) -> Vec<Bar> {
        values
            .iter()
            .enumerate()
            .map(|(index, &value)| Bar {
                rect: self.bar_rect(index, value),
                color: highlights.role(index).map_or_else(
                    || colors.gradient(index),
                    |role| colors.role_color(role),
                ),
            })
            .collect()
    }
}

/// Three lines of header text above the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// e.g. "Bubble Sort - Ascending".
    pub title: String,
    /// Reset, start and direction controls.
    pub controls: String,
    /// One entry per algorithm selector.
    pub algorithms: String,
}

impl Header {
    /// Header for the current selection, naming keys from `keys`.
    #[must_use]
    pub fn new(
        algorithm: Algorithm,
        direction: Direction,
        keys: &KeybindingOptions,
    ) -> Self {
        let controls = [
            (KeyAction::ResetArray, "Reset"),
            (KeyAction::ToggleSorting, "Start Sorting"),
            (KeyAction::Ascending, "Ascending"),
            (KeyAction::Descending, "Descending"),
        ];
        let controls = join_entries(
            controls
                .iter()
                .map(|&(action, label)| (keys.key_for(action), label)),
        );
        let algorithms =
            join_entries(Algorithm::ALL.iter().map(|&a| {
                (keys.key_for(KeyAction::for_algorithm(a)), a.name())
            }));
        Self {
            title: format!("{} - {}", algorithm.name(), direction.label()),
            controls,
            algorithms,
        }
    }
}

/// "KEY - label | KEY - label", skipping unbound actions.
fn join_entries<'a>(
    entries: impl Iterator<Item = (Option<&'a str>, &'a str)>,
) -> String {
    entries
        .filter_map(|(key, label)| {
            key.map(|k| format!("{} - {label}", key_label(k)))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Short label for a key code string ("KeyR" → "R", "Space" → "SPACE").
fn key_label(key: &str) -> String {
    key.strip_prefix("Key")
        .or_else(|| key.strip_prefix("Digit"))
        .map_or_else(|| key.to_ascii_uppercase(), str::to_owned)
}
