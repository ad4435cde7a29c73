//! Small helpers for control and telemetry loops: big-endian buffer packing,
//! loop rate limiting and angle normalization.

pub mod angle;
pub mod config;
pub mod error;
pub mod log;
pub mod pack;
pub mod rate;
pub mod result;
pub mod time;

pub use error::{Error, Result};
