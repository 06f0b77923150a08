use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas size and the padding reserved around the bars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
pub struct LayoutOptions {
    /// Canvas width in pixels.
    #[schemars(title = "Width")]
    pub width: u32,
    /// Canvas height in pixels.
    #[schemars(title = "Height")]
    pub height: u32,
    /// Total horizontal padding, split evenly left and right.
    #[schemars(title = "Side Padding")]
    pub side_pad: u32,
    /// Vertical space above the bars reserved for header text.
    #[schemars(title = "Top Padding")]
    pub top_pad: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 760,
            side_pad: 100,
            top_pad: 150,
        }
    }
}
