use crate::markup::DEFAULT_ENDPOINT;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_BLOG_TITLE: &str = "gfm test";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub markdown_api_url: String,
    pub markdown_api_timeout: Option<Duration>,
    pub blog_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            markdown_api_url: DEFAULT_ENDPOINT.to_string(),
            markdown_api_timeout: None,
            blog_title: DEFAULT_BLOG_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let markdown_api_timeout = match lookup("MARKDOWN_API_TIMEOUT_SECS") {
            Some(value) => Some(parse_timeout("MARKDOWN_API_TIMEOUT_SECS", value)?),
            None => None,
        };

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            markdown_api_url: lookup("MARKDOWN_API_URL").unwrap_or(defaults.markdown_api_url),
            markdown_api_timeout,
            blog_title: lookup("BLOG_TITLE").unwrap_or(defaults.blog_title),
        })
    }
}

fn parse_timeout(name: &'static str, value: String) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout { name, value }),
    }
}
