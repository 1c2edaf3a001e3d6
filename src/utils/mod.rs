//! Utility functions

pub mod time;
pub mod validation;

pub use time::{format_duration, from_unix_seconds, now_utc};
pub use validation::{sanitize_handle, validate_handle};
