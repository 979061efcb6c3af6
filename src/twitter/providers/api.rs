//! Live Twitter provider (`POST /2/tweets`).
//!
//! Exposes the same `post(&str)` surface as the local provider. All Twitter
//! wire types are private to this module — callers never see them. One
//! bearer-authenticated round-trip per call; OAuth 1.0a signing, rate-limit
//! handling, and retries are out of scope here.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::twitter::{PostedTweet, ProviderError};

// ── Public provider ───────────────────────────────────────────────────────────

/// Adapter for the Twitter API v2 tweet endpoint.
///
/// Constructed once at startup, then cheaply cloned because
/// `reqwest::Client` is an `Arc` internally.
#[derive(Debug, Clone)]
pub struct TwitterApiProvider {
    client: Client,
    api_base_url: String,
    bearer_token: String,
}

impl TwitterApiProvider {
    /// Build a provider from config values and a bearer token.
    ///
    /// The token is required: this backend cannot operate unauthenticated,
    /// so a missing or empty token fails construction instead of the first
    /// request.
    pub fn new(
        api_base_url: String,
        timeout_seconds: u64,
        bearer_token: Option<String>,
    ) -> Result<Self, ProviderError> {
        let bearer_token = bearer_token.filter(|t| !t.is_empty()).ok_or_else(|| {
            ProviderError::Credentials(
                "TWITTER_BEARER_TOKEN is required for the twitter provider".into(),
            )
        })?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| ProviderError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            bearer_token,
        })
    }

    /// Post `text` as a tweet. One round-trip only.
    pub async fn post(&self, text: &str) -> Result<PostedTweet, ProviderError> {
        let url = format!("{}/2/tweets", self.api_base_url);
        let payload = CreateTweetRequest { text: text.to_string() };

        debug!(url = %url, text_len = text.len(), "sending tweet");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.bearer_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "tweet HTTP request failed (transport)");
                ProviderError::Request(e.to_string())
            })?;

        let response = check_status(response).await?;

        let parsed = response.json::<CreateTweetResponse>().await.map_err(|e| {
            error!(error = %e, "failed to deserialize tweet response");
            ProviderError::Request(format!("failed to parse response body: {e}"))
        })?;

        debug!(id = %parsed.data.id, "tweet posted");

        Ok(PostedTweet {
            id: parsed.data.id,
            text: parsed.data.text,
        })
    }
}

// ── Private wire types ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct CreateTweetRequest {
    text: String,
}

#[derive(Debug, Deserialize)]
struct CreateTweetResponse {
    data: TweetData,
}

#[derive(Debug, Deserialize)]
struct TweetData {
    id: String,
    text: String,
}

// Error envelope used by the Twitter API v2.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

/// Consume the response and return it if successful, or a structured error.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read error body>".to_string());

    let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(env) => match (env.title, env.detail) {
            (Some(title), Some(detail)) => format!("HTTP {status}: {title}: {detail}"),
            (Some(title), None) => format!("HTTP {status}: {title}"),
            (None, Some(detail)) => format!("HTTP {status}: {detail}"),
            (None, None) => format!("HTTP {status}: {body}"),
        },
        Err(_) => format!("HTTP {status}: {body}"),
    };

    error!(%status, %message, "tweet request returned HTTP error");
    Err(ProviderError::Request(message))
}
