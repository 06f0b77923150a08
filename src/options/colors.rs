use serde::{Deserialize, Serialize};

use crate::sort::HighlightRole;

/// 8-bit RGB color.
pub type Rgb = [u8; 3];

/// Color palette for bars and header text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColorOptions {
    /// Canvas background.
    pub background: Rgb,
    /// Header title text.
    pub title: Rgb,
    /// Header help text.
    pub text: Rgb,
    /// Bars highlighted as [`HighlightRole::Primary`].
    pub primary: Rgb,
    /// Bars highlighted as [`HighlightRole::Secondary`].
    pub secondary: Rgb,
    /// Bars highlighted as [`HighlightRole::Anchor`].
    pub anchor: Rgb,
    /// Resting bar colors, cycled by index.
    pub gradients: [Rgb; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: [255, 255, 255],
            title: [0, 255, 0],
            text: [0, 0, 0],
            primary: [0, 255, 0],
            secondary: [255, 0, 0],
            anchor: [0, 0, 255],
            gradients: [[128, 128, 128], [160, 160, 160], [192, 192, 192]],
        }
    }
}

impl ColorOptions {
    /// Color for a highlighted bar.
    #[must_use]
    pub fn role_color(&self, role: HighlightRole) -> Rgb {
        match role {
            HighlightRole::Primary => self.primary,
            HighlightRole::Secondary => self.secondary,
            HighlightRole::Anchor => self.anchor,
        }
    }

    /// Resting color of the bar at `index`.
    #[must_use]
    pub fn gradient(&self, index: usize) -> Rgb {
        self.gradients[index % self.gradients.len()]
    }
}
