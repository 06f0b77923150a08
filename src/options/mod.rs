//! Centralized visualizer options with TOML preset support.
//!
//! Array generation, step pacing, canvas layout, colors, keybindings and
//! the startup algorithm are consolidated here. Options serialize to/from
//! TOML so presets can live next to the binary.

mod array;
mod colors;
mod keybindings;
mod layout;
mod sort;
mod timing;

use std::path::Path;

pub use array::ArrayOptions;
pub use colors::{ColorOptions, Rgb};
pub use keybindings::KeybindingOptions;
pub use layout::LayoutOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use sort::SortOptions;
pub use timing::TimingOptions;

use crate::error::SortvizError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[timing]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Startup algorithm and direction.
    pub sort: SortOptions,
    /// Generated array size and value range.
    pub array: ArrayOptions,
    /// Step and verification pacing.
    pub timing: TimingOptions,
    /// Canvas size and padding.
    pub layout: LayoutOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Write the JSON Schema to `path` (pretty-printed).
    pub fn write_schema(path: &Path) -> Result<(), SortvizError> {
        let content = serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| SortvizError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content).map_err(SortvizError::Io)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, SortvizError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| SortvizError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SortvizError> {
        let content = std::fs::read_to_string(path).map_err(SortvizError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SortvizError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SortvizError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SortvizError::Io)?;
        }
        std::fs::write(path, content).map_err(SortvizError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
