//! Leaderboard request DTOs

use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::Timeframe,
};

/// Timeframe query parameter shared by the leaderboard and tracking routes
#[derive(Debug, Default, Deserialize)]
pub struct TimeframeQuery {
    pub timeframe: Option<String>,
}

impl TimeframeQuery {
    /// Parse the requested timeframe, falling back to `default` when absent
    pub fn resolve(&self, default: Timeframe) -> AppResult<Timeframe> {
        resolve_timeframe(self.timeframe.as_deref(), default)
    }
}

/// Parse an optional timeframe identifier
pub fn resolve_timeframe(raw: Option<&str>, default: Timeframe) -> AppResult<Timeframe> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse()
            .map_err(|e: crate::models::UnknownTimeframe| AppError::InvalidInput(e.to_string())),
        None => Ok(default),
    }
}
