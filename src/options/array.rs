use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SortvizError;
use crate::model::Value;

/// Size and value range of generated arrays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Array", inline)]
#[serde(default)]
pub struct ArrayOptions {
    /// Number of bars.
    #[schemars(title = "Length", range(min = 1, max = 1024))]
    pub len: usize,
    /// Smallest value a bar may take.
    #[schemars(title = "Minimum Value")]
    pub min_value: Value,
    /// Largest value a bar may take.
    #[schemars(title = "Maximum Value")]
    pub max_value: Value,
    /// Seed for array generation and pivot choice. Unset draws from the OS.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self {
            len: 32,
            min_value: 0,
            max_value: 100,
            seed: None,
        }
    }
}

impl ArrayOptions {
    /// Reject settings that cannot produce an array.
    pub fn validate(&self) -> Result<(), SortvizError> {
        if self.len == 0 {
            return Err(SortvizError::InvalidArray(
                "array length must be positive".to_owned(),
            ));
        }
        if self.min_value > self.max_value {
            return Err(SortvizError::InvalidArray(format!(
                "min_value {} exceeds max_value {}",
                self.min_value, self.max_value
            )));
        }
        Ok(())
    }
}
