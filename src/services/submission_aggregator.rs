//! Solved-problem aggregation

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::{
    models::{SolvedSummary, Submission, Timeframe},
    provider::Provider,
};

use super::scoring;

/// Reduces a submission history to a solved count and points
pub struct SubmissionAggregator;

impl SubmissionAggregator {
    /// Count distinct accepted problems inside the timeframe and sum their points.
    ///
    /// Submissions are walked in the order given. The first accepted,
    /// in-window submission of a problem decides the rating it scores at;
    /// later ones for the same problem add nothing.
    pub fn aggregate(
        submissions: &[Submission],
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> SolvedSummary {
        let mut solved = HashSet::new();
        let mut points = 0u32;

        for submission in submissions
            .iter()
            .filter(|s| s.is_accepted() && timeframe.contains(s.created_at, now))
        {
            if solved.insert(&submission.problem) {
                points += scoring::score(submission.problem_rating);
            } else {
                tracing::trace!(problem = %submission.problem, "Repeat solve ignored");
            }
        }

        SolvedSummary {
            solved_count: Some(solved.len() as u32),
            points,
        }
    }

    /// Fetch a handle's history and aggregate it.
    ///
    /// Never fails: any provider error yields [`SolvedSummary::unknown`].
    pub async fn fetch_and_aggregate(
        provider: &dyn Provider,
        handle: &str,
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> SolvedSummary {
        match provider.fetch_submissions(handle).await {
            Ok(submissions) => {
                let summary = Self::aggregate(&submissions, timeframe, now);
                tracing::debug!(
                    handle,
                    timeframe = %timeframe,
                    submissions = submissions.len(),
                    solved = ?summary.solved_count,
                    points = summary.points,
                    "Aggregated submissions"
                );
                summary
            }
            Err(e) => {
                tracing::warn!(handle, error = %e, "Failed to fetch submissions");
                SolvedSummary::unknown()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{ProblemId, Verdict};
    use crate::provider::MockProvider;
    use chrono::Duration;

    fn submission(
        contest_id: i64,
        index: &str,
        verdict: Option<Verdict>,
        age: Duration,
        rating: Option<i32>,
        now: DateTime<Utc>,
    ) -> Submission {
        Submission {
            problem: ProblemId::new(Some(contest_id), index),
            verdict,
            created_at: now - age,
            problem_rating: rating,
        }
    }

    #[test]
    fn test_counts_only_accepted() {
        let now = Utc::now();
        let subs = vec![
            submission(1, "A", Some(Verdict::Ok), Duration::hours(1), Some(800), now),
            submission(1, "B", Some(Verdict::WrongAnswer), Duration::hours(1), Some(1000), now),
            submission(1, "C", None, Duration::hours(1), Some(1200), now),
            submission(1, "D", Some(Verdict::Other), Duration::hours(1), Some(1400), now),
        ];

        let summary = SubmissionAggregator::aggregate(&subs, Timeframe::AllTime, now);
        assert_eq!(summary.solved_count, Some(1));
        assert_eq!(summary.points, 1);
    }

    #[test]
    fn test_deduplicates_by_problem() {
        let now = Utc::now();
        let subs = vec![
            submission(1900, "B", Some(Verdict::Ok), Duration::hours(2), Some(2100), now),
            submission(1900, "B", Some(Verdict::Ok), Duration::hours(5), Some(2100), now),
            submission(1900, "C", Some(Verdict::Ok), Duration::hours(6), Some(1500), now),
        ];

        let summary = SubmissionAggregator::aggregate(&subs, Timeframe::AllTime, now);
        assert_eq!(summary.solved_count, Some(2));
        assert_eq!(summary.points, 7 + 4);
    }

    #[test]
    fn test_same_index_different_contest_is_distinct() {
        let now = Utc::now();
        let subs = vec![
            submission(1, "A", Some(Verdict::Ok), Duration::hours(1), Some(800), now),
            submission(2, "A", Some(Verdict::Ok), Duration::hours(1), Some(800), now),
        ];

        let summary = SubmissionAggregator::aggregate(&subs, Timeframe::AllTime, now);
        assert_eq!(summary.solved_count, Some(2));
    }

    #[test]
    fn test_problems_without_contest_are_distinct_by_index() {
        let now = Utc::now();
        let untied = |index: &str, rating: i32| Submission {
            problem: ProblemId::new(None, index),
            verdict: Some(Verdict::Ok),
            created_at: now - Duration::hours(1),
            problem_rating: Some(rating),
        };
        let subs = vec![
            untied("A", 800),
            untied("B", 1000),
            untied("A", 2600),
            submission(1, "A", Some(Verdict::Ok), Duration::hours(1), Some(800), now),
        ];

        let summary = SubmissionAggregator::aggregate(&subs, Timeframe::AllTime, now);
        assert_eq!(summary.solved_count, Some(3));
        assert_eq!(summary.points, 1 + 2 + 1);
    }

    #[test]
    fn test_window_filtering() {
        let now = Utc::now();
        let subs = vec![
            submission(1, "A", Some(Verdict::Ok), Duration::hours(24), Some(800), now),
            submission(1, "B", Some(Verdict::Ok), Duration::hours(24) + Duration::seconds(1), Some(1000), now),
            submission(1, "C", Some(Verdict::Ok), Duration::days(6), Some(1200), now),
        ];

        let day = SubmissionAggregator::aggregate(&subs, Timeframe::Last24Hours, now);
        assert_eq!(day.solved_count, Some(1));
        assert_eq!(day.points, 1);

        let week = SubmissionAggregator::aggregate(&subs, Timeframe::LastWeek, now);
        assert_eq!(week.solved_count, Some(3));
        assert_eq!(week.points, 1 + 2 + 3);
    }

    #[test]
    fn test_in_window_occurrence_wins_over_out_of_window() {
        let now = Utc::now();
        // Out-of-window duplicate comes first in provider order
        let subs = vec![
            submission(5, "E", Some(Verdict::Ok), Duration::days(40), Some(2600), now),
            submission(5, "E", Some(Verdict::Ok), Duration::days(3), Some(1000), now),
        ];

        let summary = SubmissionAggregator::aggregate(&subs, Timeframe::LastMonth, now);
        assert_eq!(summary.solved_count, Some(1));
        assert_eq!(summary.points, 2);
    }

    #[test]
    fn test_first_occurrence_rating_wins() {
        let now = Utc::now();
        let subs = vec![
            submission(7, "A", Some(Verdict::Ok), Duration::hours(1), Some(800), now),
            submission(7, "A", Some(Verdict::Ok), Duration::hours(2), Some(2600), now),
        ];

        let summary = SubmissionAggregator::aggregate(&subs, Timeframe::AllTime, now);
        assert_eq!(summary.points, 1);
    }

    #[test]
    fn test_empty_history() {
        let summary = SubmissionAggregator::aggregate(&[], Timeframe::LastYear, Utc::now());
        assert_eq!(summary.solved_count, Some(0));
        assert_eq!(summary.points, 0);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let now = Utc::now();
        let subs = vec![
            submission(1, "A", Some(Verdict::Ok), Duration::hours(1), Some(1300), now),
            submission(2, "B", Some(Verdict::Ok), Duration::days(2), Some(1700), now),
        ];

        let first = SubmissionAggregator::aggregate(&subs, Timeframe::LastWeek, now);
        let second = SubmissionAggregator::aggregate(&subs, Timeframe::LastWeek, now);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_provider_failure_yields_unknown() {
        let mut provider = MockProvider::new();
        provider
            .expect_fetch_submissions()
            .returning(|_| Err(AppError::ProviderUnavailable("connection reset".into())));

        let summary =
            SubmissionAggregator::fetch_and_aggregate(&provider, "carol", Timeframe::AllTime, Utc::now())
                .await;
        assert_eq!(summary, SolvedSummary::unknown());
    }

    #[tokio::test]
    async fn test_malformed_response_yields_unknown() {
        let mut provider = MockProvider::new();
        provider
            .expect_fetch_submissions()
            .returning(|_| Err(AppError::MalformedResponse("missing result".into())));

        let summary =
            SubmissionAggregator::fetch_and_aggregate(&provider, "dave", Timeframe::LastWeek, Utc::now())
                .await;
        assert_eq!(summary.solved_count, None);
        assert_eq!(summary.points, 0);
    }
}
