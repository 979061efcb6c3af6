//! Local Twitter provider — records tweets in memory instead of posting.
//! Used for local runs and tests; no network, no credentials.

use std::sync::{Arc, Mutex};

use tracing::info;

use crate::twitter::{PostedTweet, ProviderError};

/// In-memory stand-in for the live API backend.
///
/// Clones share the underlying log — a clone is the same logical provider.
/// Independently constructed instances start with empty logs.
#[derive(Debug, Clone, Default)]
pub struct LocalTwitterProvider {
    posted: Arc<Mutex<Vec<PostedTweet>>>,
}

impl LocalTwitterProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `text` and return a receipt with a synthetic sequential id.
    pub async fn post(&self, text: &str) -> Result<PostedTweet, ProviderError> {
        let mut posted = self.posted.lock().expect("local tweet log poisoned");
        let tweet = PostedTweet {
            id: format!("local-{}", posted.len() + 1),
            text: text.to_string(),
        };
        posted.push(tweet.clone());
        info!(id = %tweet.id, text_len = text.len(), "tweet recorded locally");
        Ok(tweet)
    }

    /// Tweets recorded so far, in post order.
    pub fn posted(&self) -> Vec<PostedTweet> {
        self.posted.lock().expect("local tweet log poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn post_assigns_sequential_ids() {
        let p = LocalTwitterProvider::new();
        let first = p.post("hello").await.unwrap();
        let second = p.post("world").await.unwrap();
        assert_eq!(first.id, "local-1");
        assert_eq!(second.id, "local-2");
        assert_eq!(p.posted(), vec![first, second]);
    }

    #[tokio::test]
    async fn clones_share_the_log() {
        let p = LocalTwitterProvider::new();
        let clone = p.clone();
        clone.post("via clone").await.unwrap();
        assert_eq!(p.posted().len(), 1);
        assert_eq!(p.posted()[0].text, "via clone");
    }

    #[tokio::test]
    async fn fresh_instances_are_independent() {
        let a = LocalTwitterProvider::new();
        let b = LocalTwitterProvider::new();
        a.post("only in a").await.unwrap();
        assert_eq!(a.posted().len(), 1);
        assert!(b.posted().is_empty());
    }
}
