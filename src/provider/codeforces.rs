//! Codeforces API client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::ProviderConfig,
    constants::endpoints,
    error::{AppError, AppResult},
    models::{Contest, Submission, UserProfile},
};

use super::{
    wire::{self, WireContest, WireSubmission, WireUser},
    Provider,
};

/// HTTP client for the Codeforces public API
#[derive(Clone)]
pub struct CodeforcesClient {
    http: Client,
    base_url: String,
}

impl CodeforcesClient {
    /// Create a new client
    pub fn new(config: &ProviderConfig) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Call an API method and unwrap its envelope
    async fn call<T>(&self, method: &str, query: &[(&str, &str)]) -> AppResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/{}", self.base_url, method);
        tracing::debug!(method, ?query, "Calling provider");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        wire::decode(status.is_success(), &body)
    }
}

#[async_trait]
impl Provider for CodeforcesClient {
    async fn fetch_user(&self, handle: &str) -> AppResult<Option<UserProfile>> {
        let result = self
            .call::<Vec<WireUser>>(endpoints::USER_INFO, &[("handles", handle)])
            .await;

        match result {
            Ok(users) => Ok(users.into_iter().next().map(UserProfile::from)),
            // Unknown handles come back as a FAILED envelope
            Err(AppError::ProviderRejected(comment)) if comment.contains("not found") => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn fetch_submissions(&self, handle: &str) -> AppResult<Vec<Submission>> {
        self.call::<Vec<WireSubmission>>(endpoints::USER_STATUS, &[("handle", handle)])
            .await?
            .into_iter()
            .map(Submission::try_from)
            .collect()
    }

    async fn fetch_contests(&self, handle: &str) -> AppResult<Vec<Contest>> {
        self.call::<Vec<WireContest>>(endpoints::USER_RATING, &[("handle", handle)])
            .await?
            .into_iter()
            .map(Contest::try_from)
            .collect()
    }
}
