use std::error::Error;
use std::fmt;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::Config;
use crate::types::{BoundingBox, BumpApiResponse, RoadBump};

const USER_AGENT: &str = "roadsense-viewer/1.0";

/// A failed bump fetch. `status` is set for non-2xx responses; transport
/// failures (connect errors, timeouts) and malformed bodies carry none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchError {
    pub status: Option<u16>,
    pub message: String,
}

impl FetchError {
    fn transport(message: String) -> FetchError {
        FetchError {
            status: None,
            message,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "bump fetch failed (HTTP {status}): {}", self.message),
            None => write!(f, "bump fetch failed: {}", self.message),
        }
    }
}

impl Error for FetchError {}

#[derive(Clone)]
pub struct BumpClient {
    http: Client,
    base_url: String,
}

impl BumpClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(cfg.request_timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build reqwest client")?;

        Ok(Self {
            http,
            base_url: cfg.api_base_url.clone(),
        })
    }

    pub fn bumps_url(&self, bounds: &BoundingBox) -> String {
        format!(
            "{}/bumps?north={}&south={}&east={}&west={}",
            self.base_url, bounds.north, bounds.south, bounds.east, bounds.west
        )
    }

    pub async fn fetch_bumps(&self, bounds: &BoundingBox) -> Result<Vec<RoadBump>, FetchError> {
        let url = self.bumps_url(bounds);
        debug!("Fetching bumps from {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|error| FetchError::transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_status(status, &body));
        }

        let envelope = response
            .json::<BumpApiResponse>()
            .await
            .map_err(|error| FetchError::transport(format!("Malformed bump response: {error}")))?;

        envelope
            .data
            .ok_or_else(|| FetchError::transport("Bump response carried no data".to_string()))
    }
}

fn error_from_status(status: StatusCode, body: &str) -> FetchError {
    let message = if !body.is_empty() {
        body.to_string()
    } else if let Some(reason) = status.canonical_reason() {
        reason.to_string()
    } else {
        "Unknown error".to_string()
    };

    FetchError {
        status: Some(status.as_u16()),
        message,
    }
}
