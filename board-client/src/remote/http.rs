//! HTTP remote backed by reqwest.
//!
//! Failure classification:
//! - non-2xx status → [`RemoteError::Api`] with the payload's `message`
//! - connect failure, timeout, or request never answered → [`RemoteError::Network`]
//! - everything else (bad JSON, client setup) → [`RemoteError::Unexpected`]

use async_trait::async_trait;
use postboard_types::{Comment, Post, PostId, RemoteError};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::RemoteClient;
use crate::config::ClientConfig;

/// Error payload some endpoints send with a failure status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Remote client for a JSON posts API.
#[derive(Debug, Clone)]
pub struct HttpRemote {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRemote {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Unexpected`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| RemoteError::unexpected(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a GET and decode the body.
    ///
    /// An empty body or a JSON `null` decodes to `None`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, RemoteError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| report(path, classify(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            return Err(report(path, RemoteError::api(status.as_u16(), message)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| report(path, classify(e)))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice::<Option<T>>(&bytes)
            .map_err(|e| report(path, RemoteError::unexpected(format!("invalid response body: {e}"))))
    }
}

/// Map a transport failure onto the error taxonomy.
fn classify(err: reqwest::Error) -> RemoteError {
    if err.is_timeout() || err.is_connect() || err.is_request() {
        RemoteError::Network
    } else {
        RemoteError::unexpected(err.to_string())
    }
}

/// Log a classified failure and hand it back.
fn report(path: &str, err: RemoteError) -> RemoteError {
    match &err {
        RemoteError::Api { status, message } => {
            tracing::error!(path, status, %message, "API error");
        }
        RemoteError::Network => {
            tracing::error!(path, "Network error: no response received");
        }
        RemoteError::Unexpected { message } => {
            tracing::error!(path, %message, "Unexpected error");
        }
    }
    err
}

#[async_trait]
impl RemoteClient for HttpRemote {
    async fn fetch_posts(&self) -> Result<Option<Vec<Post>>, RemoteError> {
        self.get_json("/posts", &[]).await
    }

    async fn fetch_post_by_id(&self, id: PostId) -> Result<Post, RemoteError> {
        let path = format!("/posts/{id}");
        self.get_json(&path, &[])
            .await?
            .ok_or_else(|| report(&path, RemoteError::unexpected("empty response body")))
    }

    async fn fetch_comments_by_post_id(&self, id: PostId) -> Result<Vec<Comment>, RemoteError> {
        let comments: Option<Vec<Comment>> = self
            .get_json("/comments", &[("postId", id.to_string())])
            .await?;
        Ok(comments.unwrap_or_default())
    }
}
