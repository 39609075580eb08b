//! Utility functions

pub mod time;

pub use time::{duration_to_millis, format_duration, round_millis};
