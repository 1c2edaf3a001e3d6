//! Submission model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single submission as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub problem: ProblemId,
    /// `None` while the submission is still being judged
    pub verdict: Option<Verdict>,
    pub created_at: DateTime<Utc>,
    pub problem_rating: Option<i32>,
}

impl Submission {
    /// Check if the submission was accepted
    pub fn is_accepted(&self) -> bool {
        self.verdict == Some(Verdict::Ok)
    }
}

/// Problem identity: contest id plus problem index.
///
/// Gym and acmsguru problems may come without a contest id; they are still
/// told apart by index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProblemId {
    pub contest_id: Option<i64>,
    pub index: String,
}

impl ProblemId {
    pub fn new(contest_id: Option<i64>, index: impl Into<String>) -> Self {
        Self {
            contest_id,
            index: index.into(),
        }
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.contest_id {
            Some(contest_id) => write!(f, "{}-{}", contest_id, self.index),
            None => write!(f, "?-{}", self.index),
        }
    }
}

/// Submission verdict codes used by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Failed,
    Ok,
    Partial,
    CompilationError,
    RuntimeError,
    WrongAnswer,
    PresentationError,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    IdlenessLimitExceeded,
    SecurityViolated,
    Crashed,
    InputPreparationCrashed,
    Challenged,
    Skipped,
    Testing,
    Rejected,
    #[serde(other)]
    Other,
}
