use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::sort::{Algorithm, Direction};

/// Algorithm and direction selected at startup.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Sort", inline)]
#[serde(default)]
pub struct SortOptions {
    /// Algorithm run by the start action.
    #[schemars(title = "Algorithm")]
    pub algorithm: Algorithm,
    /// Target ordering.
    #[schemars(title = "Direction")]
    pub direction: Direction,
}
