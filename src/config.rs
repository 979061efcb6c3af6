//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory,
//! then applies `ENV` and `HELICONIA_LOG_LEVEL` env overrides.

use std::{env, fs, path::Path};

use serde::Deserialize;

use crate::error::AppError;

/// Twitter API endpoint configuration (`[twitter.api]` in the TOML).
#[derive(Debug, Clone)]
pub struct TwitterApiConfig {
    /// Base URL of the Twitter API v2.
    pub api_base_url: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for TwitterApiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Twitter subsystem configuration.
#[derive(Debug, Clone)]
pub struct TwitterConfig {
    /// Resolved environment name that drives provider selection
    /// (e.g. `"prod"`, `"dev"`, `"local"`). `"prod"` selects the live API
    /// backend; everything else selects the local stand-in.
    pub env: String,
    /// Config for the live API backend (`[twitter.api]`).
    pub api: TwitterApiConfig,
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            env: "local".to_string(),
            api: TwitterApiConfig::default(),
        }
    }
}

/// Fully-resolved bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_name: String,
    pub log_level: String,
    pub twitter: TwitterConfig,
    /// Bearer token from `TWITTER_BEARER_TOKEN` env var — `None` for local
    /// runs. Never sourced from TOML.
    pub bearer_token: Option<String>,
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize)]
struct RawConfig {
    bot: RawBot,
    #[serde(default)]
    twitter: RawTwitter,
}

#[derive(Deserialize)]
struct RawBot {
    name: String,
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Deserialize, Default)]
struct RawTwitter {
    /// Optional pin for the environment name. When absent the `ENV` process
    /// variable applies, defaulting to `"local"`.
    #[serde(default)]
    env: Option<String>,
    #[serde(default)]
    api: RawTwitterApi,
}

#[derive(Deserialize)]
struct RawTwitterApi {
    #[serde(default = "default_api_base_url")]
    api_base_url: String,
    #[serde(default = "default_timeout_seconds")]
    timeout_seconds: u64,
}

impl Default for RawTwitterApi {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_api_base_url() -> String { "https://api.twitter.com".to_string() }
fn default_timeout_seconds() -> u64 { 30 }

/// Resolve the environment name from an optional raw value.
///
/// Missing and empty both fall back to the `"local"` literal, matching the
/// selection contract: only a non-empty value can reach the `"prod"` branch.
pub fn resolve_env(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "local".to_string(),
    }
}

/// Load config from `config/default.toml`, then apply env-var overrides.
pub fn load() -> Result<Config, AppError> {
    let env_override = env::var("ENV").ok();
    let log_level_override = env::var("HELICONIA_LOG_LEVEL").ok();
    let bearer_token = env::var("TWITTER_BEARER_TOKEN").ok();
    load_from(
        Path::new("config/default.toml"),
        env_override.as_deref(),
        log_level_override.as_deref(),
        bearer_token,
    )
}

/// Internal loader — accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    env_override: Option<&str>,
    log_level_override: Option<&str>,
    bearer_token: Option<String>,
) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    let log_level = log_level_override
        .unwrap_or(&parsed.bot.log_level)
        .to_string();

    // Process env beats TOML, TOML beats the default literal. An empty
    // override counts as unset and must not shadow a TOML pin.
    let env_name = resolve_env(
        env_override
            .filter(|s| !s.is_empty())
            .or(parsed.twitter.env.as_deref()),
    );

    Ok(Config {
        bot_name: parsed.bot.name,
        log_level,
        twitter: TwitterConfig {
            env: env_name,
            api: TwitterApiConfig {
                api_base_url: parsed.twitter.api.api_base_url,
                timeout_seconds: parsed.twitter.api.timeout_seconds,
            },
        },
        bearer_token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL_TOML: &str = r#"
[bot]
name = "test-bot"
"#;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_basic_config() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), None, None, None).unwrap();
        assert_eq!(cfg.bot_name, "test-bot");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.twitter.env, "local");
        assert_eq!(cfg.twitter.api.api_base_url, "https://api.twitter.com");
        assert_eq!(cfg.twitter.api.timeout_seconds, 30);
    }

    #[test]
    fn missing_file_errors() {
        let result = load_from(Path::new("/nonexistent/config.toml"), None, None, None);
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("config error"));
    }

    #[test]
    fn env_override_beats_toml() {
        let f = write_toml(
            r#"
[bot]
name = "test-bot"

[twitter]
env = "dev"
"#,
        );
        let cfg = load_from(f.path(), Some("prod"), None, None).unwrap();
        assert_eq!(cfg.twitter.env, "prod");
    }

    #[test]
    fn toml_env_used_without_override() {
        let f = write_toml(
            r#"
[bot]
name = "test-bot"

[twitter]
env = "dev"
"#,
        );
        let cfg = load_from(f.path(), None, None, None).unwrap();
        assert_eq!(cfg.twitter.env, "dev");
    }

    #[test]
    fn empty_env_override_falls_back_to_toml_pin() {
        let f = write_toml(
            r#"
[bot]
name = "test-bot"

[twitter]
env = "prod"
"#,
        );
        let cfg = load_from(f.path(), Some(""), None, None).unwrap();
        assert_eq!(cfg.twitter.env, "prod");
    }

    #[test]
    fn empty_env_override_without_pin_is_local() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), Some(""), None, None).unwrap();
        assert_eq!(cfg.twitter.env, "local");
    }

    #[test]
    fn log_level_override_applies() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), None, Some("debug"), None).unwrap();
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn bearer_token_passes_through() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), None, None, Some("tok".into())).unwrap();
        assert_eq!(cfg.bearer_token.as_deref(), Some("tok"));
    }

    #[test]
    fn resolve_env_defaults() {
        assert_eq!(resolve_env(None), "local");
        assert_eq!(resolve_env(Some("")), "local");
        assert_eq!(resolve_env(Some("prod")), "prod");
        assert_eq!(resolve_env(Some("dev")), "dev");
    }
}
