//! Client for the backend proxy that fronts the GitHub API.
//!
//! Every failure is normalized into a single human-readable message: an HTML
//! response means the request hit something other than the API (dev server,
//! reverse proxy), a transport error means the backend is down, and an error
//! status carries the backend's structured `message` when one is present.
//! Nothing is retried automatically.

use crate::model::{Repository, TreeResponse, UserProfile};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend could not be reached at all.
    #[error("cannot connect to backend server; please ensure the backend is running on {base_url}")]
    Connect { base_url: String },

    /// The backend answered with an HTML page instead of JSON.
    #[error(
        "backend server is not responding; please ensure the backend is running on {base_url}"
    )]
    ErrorPage { base_url: String },

    /// The backend answered with an error status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded as the expected payload.
    #[error("invalid response from backend: {0}")]
    Decode(#[source] reqwest::Error),

    /// The configured base URL is not usable.
    #[error("invalid backend URL {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },
}

pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::BaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ApiError::BaseUrl {
                url: base_url.to_string(),
                reason: "not a base URL".to_string(),
            });
        }
        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// `GET /api/user/{username}`
    pub async fn user(&self, username: &str) -> Result<UserProfile, ApiError> {
        self.fetch_json(self.endpoint(&["api", "user", username]))
            .await
    }

    /// `GET /api/user/{username}/repos`
    pub async fn user_repositories(&self, username: &str) -> Result<Vec<Repository>, ApiError> {
        self.fetch_json(self.endpoint(&["api", "user", username, "repos"]))
            .await
    }

    /// `GET /api/user/{username}/starred`
    pub async fn user_starred(&self, username: &str) -> Result<Vec<Repository>, ApiError> {
        self.fetch_json(self.endpoint(&["api", "user", username, "starred"]))
            .await
    }

    /// `GET /api/repos/{owner}/{repo}/tree?branch={branch}`
    ///
    /// With no branch the backend resolves the repository's default branch;
    /// either way the response names the branch it listed.
    pub async fn repository_tree(
        &self,
        owner: &str,
        repo: &str,
        branch: Option<&str>,
    ) -> Result<TreeResponse, ApiError> {
        let mut url = self.endpoint(&["api", "repos", owner, repo, "tree"]);
        if let Some(branch) = branch {
            url.query_pairs_mut().append_pair("branch", branch);
        }
        self.fetch_json(url).await
    }

    /// `GET /api/repos/{owner}/{repo}/languages`
    pub async fn repository_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<BTreeMap<String, u64>, ApiError> {
        self.fetch_json(self.endpoint(&["api", "repos", owner, repo, "languages"]))
            .await
    }

    /// Join percent-encoded path segments onto the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|_| ApiError::Connect {
                base_url: self.base.to_string(),
            })?;

        let html = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_html_content);
        if html {
            return Err(ApiError::ErrorPage {
                base_url: self.base.to_string(),
            });
        }

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| status_fallback(status));
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(ApiError::Decode)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// An HTML answer means the request hit a dev server or error page rather
/// than the API, regardless of status code; it is reported as a
/// connectivity problem, never shown raw.
fn is_html_content(content_type: &str) -> bool {
    content_type.contains("text/html")
}

fn status_fallback(status: StatusCode) -> String {
    format!(
        "HTTP {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("request failed")
    )
}
