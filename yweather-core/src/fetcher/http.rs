use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use xmltree::Element;

use super::{FetchError, XmlFetcher};

#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl XmlFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Element, FetchError> {
        debug!("GET {url}");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.bytes().await?;
        debug!("{url} responded with {status} ({} bytes)", body.len());

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&String::from_utf8_lossy(&body)),
            });
        }

        Ok(Element::parse(&body[..])?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
