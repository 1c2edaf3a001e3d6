//! Leaderboard assembly

use chrono::{DateTime, Utc};
use futures::future::join_all;

use crate::{
    models::{ContestSummaryRow, LeaderboardRow, Timeframe, TrackedUser},
    provider::Provider,
};

use super::{ContestCounter, SubmissionAggregator};

/// Builds the derived leaderboard views for a set of tracked users
pub struct LeaderboardService;

impl LeaderboardService {
    /// Rank tracked users by points for a timeframe.
    ///
    /// Histories are fetched for every user at once and collected in input
    /// order. A user whose fetch fails gets a sentinel row. Rows are sorted by
    /// points descending with a stable sort, so ties keep input order.
    pub async fn assemble(
        provider: &dyn Provider,
        users: &[TrackedUser],
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> Vec<LeaderboardRow> {
        let summaries = join_all(users.iter().map(|user| {
            SubmissionAggregator::fetch_and_aggregate(provider, &user.handle, timeframe, now)
        }))
        .await;

        let mut rows: Vec<LeaderboardRow> = users
            .iter()
            .zip(summaries)
            .map(|(user, summary)| LeaderboardRow {
                handle: user.handle.clone(),
                solved_count: summary.solved_count,
                points: summary.points,
            })
            .collect();

        rows.sort_by(|a, b| b.points.cmp(&a.points));

        tracing::info!(timeframe = %timeframe, rows = rows.len(), "Leaderboard assembled");
        rows
    }

    /// Contest participation per tracked user, in store order
    pub async fn contest_summary(
        provider: &dyn Provider,
        users: &[TrackedUser],
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> Vec<ContestSummaryRow> {
        let counts = join_all(users.iter().map(|user| {
            ContestCounter::fetch_and_count(provider, &user.handle, timeframe, now)
        }))
        .await;

        users
            .iter()
            .zip(counts)
            .map(|(user, contest_count)| ContestSummaryRow {
                handle: user.handle.clone(),
                contest_count,
                rating: user.rating,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{Contest, ProblemId, Submission, Verdict};
    use crate::provider::MockProvider;
    use chrono::Duration;

    fn tracked(handle: &str) -> TrackedUser {
        TrackedUser {
            handle: handle.to_string(),
            rating: Some(1400),
            solved_count: Some(0),
            points: 0,
        }
    }

    fn solved(now: DateTime<Utc>, problems: &[(i64, &str, i32)]) -> Vec<Submission> {
        problems
            .iter()
            .map(|(contest_id, index, rating)| Submission {
                problem: ProblemId::new(Some(*contest_id), *index),
                verdict: Some(Verdict::Ok),
                created_at: now - Duration::hours(1),
                problem_rating: Some(*rating),
            })
            .collect()
    }

    fn provider_with(now: DateTime<Utc>) -> MockProvider {
        let mut provider = MockProvider::new();
        provider.expect_fetch_submissions().returning(move |handle| match handle {
            "alice" => Ok(solved(now, &[(1, "A", 800)])),
            "bob" => Ok(solved(now, &[(1, "A", 800), (2, "B", 2600)])),
            "carol" => Err(AppError::ProviderUnavailable("timed out".into())),
            "dave" => Ok(solved(now, &[(3, "C", 900)])),
            _ => Ok(Vec::new()),
        });
        provider
    }

    #[tokio::test]
    async fn test_sorted_by_points_descending() {
        let now = Utc::now();
        let provider = provider_with(now);
        let users = vec![tracked("alice"), tracked("bob")];

        let rows = LeaderboardService::assemble(&provider, &users, Timeframe::AllTime, now).await;
        let handles: Vec<_> = rows.iter().map(|r| r.handle.as_str()).collect();
        assert_eq!(handles, vec!["bob", "alice"]);
        assert_eq!(rows[0].points, 11);
        assert_eq!(rows[0].solved_count, Some(2));
    }

    #[tokio::test]
    async fn test_ties_keep_input_order() {
        let now = Utc::now();
        let provider = provider_with(now);
        let users = vec![tracked("zed"), tracked("amy")];

        let rows = LeaderboardService::assemble(&provider, &users, Timeframe::AllTime, now).await;
        let handles: Vec<_> = rows.iter().map(|r| r.handle.as_str()).collect();
        assert_eq!(handles, vec!["zed", "amy"]);

        let again = LeaderboardService::assemble(&provider, &users, Timeframe::AllTime, now).await;
        assert_eq!(rows, again);
    }

    #[tokio::test]
    async fn test_failed_user_degrades_without_aborting() {
        let now = Utc::now();
        let provider = provider_with(now);
        let users = vec![tracked("dave"), tracked("carol"), tracked("alice")];

        let rows = LeaderboardService::assemble(&provider, &users, Timeframe::AllTime, now).await;
        assert_eq!(rows.len(), 3);

        let carol = rows.iter().find(|r| r.handle == "carol").unwrap();
        assert_eq!(carol.solved_count, None);
        assert_eq!(carol.points, 0);

        // dave and alice tie on one point each and keep their input order
        let handles: Vec<_> = rows.iter().map(|r| r.handle.as_str()).collect();
        assert_eq!(handles, vec!["dave", "alice", "carol"]);
    }

    #[tokio::test]
    async fn test_empty_users() {
        let provider = MockProvider::new();
        let rows = LeaderboardService::assemble(&provider, &[], Timeframe::LastWeek, Utc::now()).await;
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_contest_summary_in_store_order() {
        let now = Utc::now();
        let mut provider = MockProvider::new();
        provider.expect_fetch_contests().returning(move |handle| match handle {
            "alice" => Ok(vec![Contest {
                started_at: now - Duration::days(2),
            }]),
            "bob" => Ok(vec![
                Contest {
                    started_at: now - Duration::days(1),
                },
                Contest {
                    started_at: now - Duration::days(3),
                },
            ]),
            _ => Err(AppError::MalformedResponse("bad".into())),
        });

        let mut unrated = tracked("carol");
        unrated.rating = None;
        let users = vec![tracked("alice"), tracked("bob"), unrated];

        let rows =
            LeaderboardService::contest_summary(&provider, &users, Timeframe::LastWeek, now).await;
        assert_eq!(
            rows,
            vec![
                ContestSummaryRow {
                    handle: "alice".into(),
                    contest_count: 1,
                    rating: Some(1400)
                },
                ContestSummaryRow {
                    handle: "bob".into(),
                    contest_count: 2,
                    rating: Some(1400)
                },
                ContestSummaryRow {
                    handle: "carol".into(),
                    contest_count: 0,
                    rating: None
                },
            ]
        );
    }
}
