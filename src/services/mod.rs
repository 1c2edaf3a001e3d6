//! Business logic services

pub mod contest_counter;
pub mod leaderboard_service;
pub mod scoring;
pub mod submission_aggregator;
pub mod tracker_service;

pub use contest_counter::ContestCounter;
pub use leaderboard_service::LeaderboardService;
pub use submission_aggregator::SubmissionAggregator;
pub use tracker_service::TrackerService;
