use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Api,
    Mock,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "api" => Ok(Mode::Api),
            "mock" => Ok(Mode::Mock),
            _ => anyhow::bail!("Invalid MODE: {}. Must be 'api' or 'mock'", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mode_str = env::var("MODE").unwrap_or_else(|_| "api".to_string());
        let mode = Mode::from_str(&mode_str)?;

        let api_base_url =
            env::var("PREDICT_API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
        url::Url::parse(&api_base_url)
            .with_context(|| format!("Invalid PREDICT_API_URL: {}", api_base_url))?;
        // Requests append their own path segment
        let api_base_url = api_base_url.trim_end_matches('/').to_string();

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .context("Failed to parse REQUEST_TIMEOUT_SECS")?;

        Ok(Config {
            mode,
            api_base_url,
            request_timeout_secs,
        })
    }
}
