//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{MAX_HANDLE_LENGTH, MIN_HANDLE_LENGTH};

static HANDLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("handle pattern is valid")
});

/// Validate handle format
pub fn validate_handle(handle: &str) -> Result<(), &'static str> {
    let len = handle.chars().count() as u64;
    if len < MIN_HANDLE_LENGTH {
        return Err("Handle must be at least 3 characters");
    }
    if len > MAX_HANDLE_LENGTH {
        return Err("Handle must be at most 24 characters");
    }
    if !HANDLE_PATTERN.is_match(handle) {
        return Err("Handle can only contain letters, numbers, underscores, hyphens, and dots");
    }
    Ok(())
}

/// Sanitize a handle (remove control characters, trim whitespace)
pub fn sanitize_handle(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}
