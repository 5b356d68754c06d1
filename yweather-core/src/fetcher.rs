use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;
use xmltree::Element;

pub mod http;

pub use http::HttpFetcher;

/// Failure to obtain a parsed XML document from the weather service.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to send request to weather service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Weather service request failed with status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("Failed to parse weather service XML: {0}")]
    Parse(#[from] xmltree::ParseError),
}

/// Retrieves a URL and returns the root element of the XML document it serves.
///
/// Every public `Client` operation calls `fetch` exactly once and never retries.
#[async_trait]
pub trait XmlFetcher: Send + Sync + Debug {
    async fn fetch(&self, url: &str) -> Result<Element, FetchError>;
}
