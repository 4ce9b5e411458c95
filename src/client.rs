//! Joke service HTTP client
//!
//! Used by the terminal client to fetch jokes and submit new ones, and by
//! the submission microservice to seed its type list.

use reqwest::{StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::{ErrorResponse, Joke, SubmissionRequest, SubmissionResponse};

/// Failures while talking to the joke service.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(StatusCode),
}

/// Reply from POST /submit on the submission microservice.
///
/// Any body carrying an `error` key is a rejection, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SubmitOutcome {
    Rejected(ErrorResponse),
    Accepted(SubmissionResponse),
}

/// Thin wrapper over reqwest bound to one service.
#[derive(Debug, Clone)]
pub struct JokeClient {
    base_url: Url,
    http: reqwest::Client,
}

impl JokeClient {
    /// Creates a client for the service at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// GET /types
    pub async fn types(&self) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint(&["types"]);
        self.get_json(url).await
    }

    /// GET /joke/:type?count=N
    pub async fn jokes(&self, joke_type: &str, count: i64) -> Result<Vec<Joke>, ClientError> {
        let mut url = self.endpoint(&["joke", joke_type]);
        url.query_pairs_mut().append_pair("count", &count.to_string());
        self.get_json(url).await
    }

    /// POST /submit
    ///
    /// Only transport failures and unreadable bodies are errors; a 400 with
    /// an `error` message comes back as [`SubmitOutcome::Rejected`].
    pub async fn submit(&self, request: &SubmissionRequest) -> Result<SubmitOutcome, ClientError> {
        let url = self.endpoint(&["submit"]);
        debug!("Posting submission to {}", url);
        let response = self.http.post(url).json(request).send().await?;
        Ok(response.json().await?)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!("Making request to {}", url);
        let response = self.http.get(url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}
