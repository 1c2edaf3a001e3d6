//! Provider wire format

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    constants::PROVIDER_STATUS_OK,
    error::{AppError, AppResult},
    models::{Contest, ProblemId, Submission, UserProfile, Verdict},
    utils::from_unix_seconds,
};

/// Response envelope wrapped around every provider result
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub comment: Option<String>,
    pub result: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the result, turning a `FAILED` status into a rejection
    pub fn into_result(self) -> AppResult<T> {
        if self.status != PROVIDER_STATUS_OK {
            return Err(AppError::ProviderRejected(
                self.comment.unwrap_or(self.status),
            ));
        }

        self.result
            .ok_or_else(|| AppError::MalformedResponse("missing result".to_string()))
    }
}

/// Decode a response body into its envelope result.
///
/// A body that is not a valid envelope is malformed when the HTTP status was
/// a success and a rejection otherwise.
pub fn decode<T>(http_success: bool, body: &str) -> AppResult<T>
where
    T: for<'de> Deserialize<'de>,
{
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(envelope) => envelope.into_result(),
        Err(e) if http_success => Err(AppError::MalformedResponse(e.to_string())),
        Err(e) => Err(AppError::ProviderRejected(format!("undecodable error body: {}", e))),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireUser {
    pub handle: String,
    pub rating: Option<i32>,
}

impl From<WireUser> for UserProfile {
    fn from(user: WireUser) -> Self {
        Self {
            handle: user.handle,
            rating: user.rating,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProblem {
    pub contest_id: Option<i64>,
    pub index: String,
    pub rating: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSubmission {
    pub creation_time_seconds: i64,
    pub problem: WireProblem,
    pub verdict: Option<Verdict>,
}

impl TryFrom<WireSubmission> for Submission {
    type Error = AppError;

    fn try_from(wire: WireSubmission) -> AppResult<Self> {
        Ok(Self {
            problem: ProblemId::new(wire.problem.contest_id, wire.problem.index),
            verdict: wire.verdict,
            created_at: from_unix(wire.creation_time_seconds)?,
            problem_rating: wire.problem.rating,
        })
    }
}

/// Contest participation record.
///
/// `user.rating` reports when the rating change was applied rather than
/// when the contest started, so that field is accepted as the start time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireContest {
    #[serde(alias = "ratingUpdateTimeSeconds")]
    pub start_time_seconds: i64,
}

impl TryFrom<WireContest> for Contest {
    type Error = AppError;

    fn try_from(wire: WireContest) -> AppResult<Self> {
        Ok(Self {
            started_at: from_unix(wire.start_time_seconds)?,
        })
    }
}

fn from_unix(secs: i64) -> AppResult<DateTime<Utc>> {
    from_unix_seconds(secs)
        .ok_or_else(|| AppError::MalformedResponse(format!("timestamp out of range: {}", secs)))
}
