//! Runtime configuration: generation endpoint, request timeout, fallback delay.
//! Defaults work out of the box; `POEM_*` environment variables override them.

use std::time::Duration;

use tracing::warn;
use url::Url;

/// Generation endpoint used when `POEM_API_URL` is not set.
pub const DEFAULT_ENDPOINT: &str = "https://api.gpteng.co/generate";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_FALLBACK_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone)]
pub struct Config {
    /// Where generation requests are POSTed.
    pub endpoint: Url,
    /// Client-side bound on a single generation attempt.
    pub request_timeout: Duration,
    /// Cosmetic pause before a fallback poem is published.
    pub fallback_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint URL is valid"),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            fallback_delay: Duration::from_millis(DEFAULT_FALLBACK_DELAY_MS),
        }
    }
}

impl Config {
    /// Reads overrides from the environment. Unparseable values are ignored
    /// with a warning so a bad `.env` never prevents startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("POEM_API_URL") {
            match Url::parse(&raw) {
                Ok(url) => config.endpoint = url,
                Err(err) => warn!(%raw, error = %err, "ignoring invalid POEM_API_URL"),
            }
        }

        if let Ok(raw) = std::env::var("POEM_REQUEST_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) => config.request_timeout = Duration::from_secs(secs),
                Err(err) => {
                    warn!(%raw, error = %err, "ignoring invalid POEM_REQUEST_TIMEOUT_SECS")
                }
            }
        }

        if let Ok(raw) = std::env::var("POEM_FALLBACK_DELAY_MS") {
            match raw.parse::<u64>() {
                Ok(ms) => config.fallback_delay = Duration::from_millis(ms),
                Err(err) => warn!(%raw, error = %err, "ignoring invalid POEM_FALLBACK_DELAY_MS"),
            }
        }

        config
    }
}
