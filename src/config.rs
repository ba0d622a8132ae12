use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::constants::DEFAULT_REQUEST_TIMEOUT_SECONDS;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_base_url = env_optional("API_URL")
            .map(|value| trim_base_url(&value))
            .filter(|value| !value.is_empty());
        let Some(api_base_url) = api_base_url else {
            bail!("API_URL is not set; the bump API base URL is required");
        };

        let request_timeout = Duration::from_secs(env_u64(
            "ROADSENSE_REQUEST_TIMEOUT_SECONDS",
            DEFAULT_REQUEST_TIMEOUT_SECONDS,
        )?);

        Ok(Self {
            api_base_url,
            request_timeout,
        })
    }
}

fn trim_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn env_optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_u64(name: &str, default: u64) -> Result<u64> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<u64>()
            .with_context(|| format!("Failed to parse {}={} as u64", name, value)),
        Err(_) => Ok(default),
    }
}
