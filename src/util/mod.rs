//! Shared utilities for the driver.

pub mod frame_timing;
