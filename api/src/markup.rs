//! Markdown to HTML conversion through a hosted rendering API.
//!
//! The default endpoint is GitHub's raw markdown API, which takes the source
//! as a `text/plain` body and answers with the rendered HTML.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/markdown/raw";

const USER_AGENT: &str = concat!("blogengine/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("markdown API request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("markdown API returned {status}")]
    Status { status: StatusCode, body: String },

    #[error("markdown API response is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

#[async_trait]
pub trait MarkupConverter: Send + Sync {
    async fn convert(&self, text: &str) -> Result<String, ConvertError>;
}

/// Converter backed by a remote rendering endpoint.
#[derive(Debug, Clone)]
pub struct RemoteMarkdown {
    client: Client,
    endpoint: String,
}

impl RemoteMarkdown {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Builds the HTTP client used in production. Without `timeout` a request
    /// waits as long as the remote side keeps the connection open.
    pub fn client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MarkupConverter for RemoteMarkdown {
    async fn convert(&self, text: &str) -> Result<String, ConvertError> {
        debug!("Converting {} bytes via {}", text.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "text/plain")
            .body(text.as_bytes().to_vec())
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            warn!("Markdown API answered {}", status);
            return Err(ConvertError::Status { status, body });
        }

        Ok(String::from_utf8(body.to_vec())?)
    }
}
