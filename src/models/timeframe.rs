//! Timeframe model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{timeframes, windows};

/// Recency window applied to submissions and contests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "24hrs")]
    Last24Hours,
    #[serde(rename = "1week")]
    LastWeek,
    #[serde(rename = "1month")]
    LastMonth,
    #[serde(rename = "1year")]
    LastYear,
    #[serde(rename = "all")]
    AllTime,
}

impl Timeframe {
    /// Length of the window, `None` when unbounded.
    ///
    /// This is the only place window durations are defined; both the
    /// solved-problem and the contest views go through it.
    pub fn window(&self) -> Option<Duration> {
        let secs = match self {
            Self::Last24Hours => windows::DAY_SECS,
            Self::LastWeek => windows::WEEK_SECS,
            Self::LastMonth => windows::MONTH_SECS,
            Self::LastYear => windows::YEAR_SECS,
            Self::AllTime => return None,
        };
        Some(Duration::seconds(secs))
    }

    /// Whether an event at `at` falls inside the window ending at `now`.
    ///
    /// Events dated after `now` have a negative age and are always inside.
    pub fn contains(&self, at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.window() {
            Some(window) => now - at <= window,
            None => true,
        }
    }

    /// Get timeframe as its query identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Last24Hours => timeframes::LAST_24_HOURS,
            Self::LastWeek => timeframes::LAST_WEEK,
            Self::LastMonth => timeframes::LAST_MONTH,
            Self::LastYear => timeframes::LAST_YEAR,
            Self::AllTime => timeframes::ALL_TIME,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unrecognised timeframe identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown timeframe '{0}'")]
pub struct UnknownTimeframe(pub String);

impl FromStr for Timeframe {
    type Err = UnknownTimeframe;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            timeframes::LAST_24_HOURS => Ok(Self::Last24Hours),
            timeframes::LAST_WEEK => Ok(Self::LastWeek),
            timeframes::LAST_MONTH => Ok(Self::LastMonth),
            timeframes::LAST_YEAR => Ok(Self::LastYear),
            timeframes::ALL_TIME => Ok(Self::AllTime),
            other => Err(UnknownTimeframe(other.to_string())),
        }
    }
}
