use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pacing of sort steps and verification frames.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Timing", inline)]
#[serde(default)]
pub struct TimingOptions {
    /// Sort steps per second (0 = unlimited).
    #[schemars(title = "Steps per Second", range(max = 1000))]
    pub steps_per_second: u32,
    /// Verification frames per second (0 = unlimited).
    #[schemars(title = "Verify Frames per Second", range(max = 1000))]
    pub verify_frames_per_second: u32,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            steps_per_second: 10,
            verify_frames_per_second: 30,
        }
    }
}
