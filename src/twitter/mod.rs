//! Twitter provider abstraction.
//!
//! `TwitterProvider` is an enum over concrete provider implementations.
//! Add a new variant + module in `providers/` for each additional backend.
//!
//! Provider instances are shared immutable capabilities — clone them freely.
//! Async is delegated to the underlying provider; the `post` method is
//! `async fn` on the enum so callers need no trait-object machinery.

pub mod providers;

use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Defensive fallback for a provider kind outside `{"twitter", "local"}`.
    /// Unreachable through the current two-valued environment mapping.
    #[error("Unknown twitter provider: {0}")]
    UnknownProvider(String),

    #[error("missing credentials: {0}")]
    Credentials(String),

    #[error("provider request failed: {0}")]
    Request(String),
}

// ── Receipt ───────────────────────────────────────────────────────────────────

/// Receipt for a successfully posted tweet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedTweet {
    /// Tweet id — assigned by the API, or synthetic for the local backend.
    pub id: String,
    /// Tweet text as accepted by the backend.
    pub text: String,
}

// ── Provider enum ─────────────────────────────────────────────────────────────

/// All available provider backends.
///
/// Enum dispatch avoids `dyn` trait objects and the `async-trait` dependency.
/// Adding a backend = new module + new variant + new `post` arm.
#[derive(Debug, Clone)]
pub enum TwitterProvider {
    /// Live Twitter API backend — selected when the environment is `"prod"`.
    Api(providers::api::TwitterApiProvider),
    /// In-memory stand-in — selected for every other environment.
    Local(providers::local::LocalTwitterProvider),
}

impl TwitterProvider {
    /// Provider kind tag: `"twitter"` for the live backend, `"local"` for
    /// the stand-in.
    pub fn kind(&self) -> &'static str {
        match self {
            TwitterProvider::Api(_) => "twitter",
            TwitterProvider::Local(_) => "local",
        }
    }

    /// Post `text` as a tweet through the selected backend.
    pub async fn post(&self, text: &str) -> Result<PostedTweet, ProviderError> {
        match self {
            TwitterProvider::Api(p) => p.post(text).await,
            TwitterProvider::Local(p) => p.post(text).await,
        }
    }
}
