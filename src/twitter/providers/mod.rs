//! Twitter provider implementations.
//!
//! `build(config, bearer_token)` is the factory — called at startup.
//! Adding a new backend = new module + new match arm.

pub mod api;
pub mod local;

use std::env;

use crate::config::{TwitterConfig, resolve_env};
use crate::twitter::{ProviderError, TwitterProvider};

/// Map an environment name to a provider kind.
///
/// `"prod"` selects the live API backend; every other value (including
/// `"dev"` and the `"local"` default) selects the local stand-in.
pub fn kind_for_env(env: &str) -> &'static str {
    if env == "prod" { "twitter" } else { "local" }
}

/// Construct a `TwitterProvider` from config and an optional bearer token.
///
/// `bearer_token` is sourced from `TWITTER_BEARER_TOKEN` env (never TOML)
/// and is only required by the live backend. Every call constructs a fresh
/// provider — no pooling, no singleton.
pub fn build(
    config: &TwitterConfig,
    bearer_token: Option<String>,
) -> Result<TwitterProvider, ProviderError> {
    match kind_for_env(&config.env) {
        "twitter" => {
            let api = &config.api;
            let p = api::TwitterApiProvider::new(
                api.api_base_url.clone(),
                api.timeout_seconds,
                bearer_token,
            )?;
            Ok(TwitterProvider::Api(p))
        }
        "local" => Ok(TwitterProvider::Local(local::LocalTwitterProvider::new())),
        other => Err(ProviderError::UnknownProvider(other.to_string())),
    }
}

/// `build` with everything taken from process env: the environment name from
/// `ENV` (unset and empty both mean `"local"`), the token from
/// `TWITTER_BEARER_TOKEN`, and default API settings.
///
/// Prefer [`build`] with an explicit config anywhere but the binary entry
/// point — it keeps the selection a pure function of its arguments.
pub fn build_from_env() -> Result<TwitterProvider, ProviderError> {
    let config = TwitterConfig {
        env: resolve_env(env::var("ENV").ok().as_deref()),
        ..TwitterConfig::default()
    };
    build(&config, env::var("TWITTER_BEARER_TOKEN").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prod_maps_to_twitter_kind() {
        assert_eq!(kind_for_env("prod"), "twitter");
    }

    #[test]
    fn everything_else_maps_to_local_kind() {
        for env in &["local", "dev", "staging", "", "PROD", "production"] {
            assert_eq!(kind_for_env(env), "local", "env '{env}'");
        }
    }

    #[test]
    fn build_local_needs_no_token() {
        let config = TwitterConfig::default();
        let provider = build(&config, None).unwrap();
        assert_eq!(provider.kind(), "local");
    }

    #[test]
    fn build_prod_selects_api_backend() {
        let config = TwitterConfig { env: "prod".into(), ..TwitterConfig::default() };
        let provider = build(&config, Some("token".into())).unwrap();
        assert_eq!(provider.kind(), "twitter");
    }

    #[test]
    fn build_prod_without_token_errors() {
        let config = TwitterConfig { env: "prod".into(), ..TwitterConfig::default() };
        let err = build(&config, None).unwrap_err();
        assert!(matches!(err, ProviderError::Credentials(_)));
    }
}
