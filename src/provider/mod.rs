//! Remote data provider
//!
//! The provider is the read-only source of profiles, submission histories and
//! contest histories. Everything above this module talks to it through the
//! [`Provider`] trait so that services can be exercised without the network.

pub mod codeforces;
mod wire;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Contest, Submission, UserProfile},
};

pub use codeforces::CodeforcesClient;

/// Read-only queries against the remote provider.
///
/// All calls are idempotent and side-effect free.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Fetch a public profile, `None` when the handle does not exist
    async fn fetch_user(&self, handle: &str) -> AppResult<Option<UserProfile>>;

    /// Fetch the full submission history in provider order
    async fn fetch_submissions(&self, handle: &str) -> AppResult<Vec<Submission>>;

    /// Fetch every contest the handle took part in
    async fn fetch_contests(&self, handle: &str) -> AppResult<Vec<Contest>>;
}
