//! Contest model

use chrono::{DateTime, Utc};

/// A contest the user took part in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contest {
    pub started_at: DateTime<Utc>,
}
