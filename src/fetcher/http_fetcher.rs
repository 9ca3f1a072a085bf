use async_trait::async_trait;
use reqwest::Client;

use crate::app::{MushafError, Result};
use crate::fetcher::{FetchedResponse, Fetcher};

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .gzip(true)
            .brotli(true)
            .user_agent("mushaf/0.1.0")
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| classify(url, e))?
            .to_vec();

        Ok(FetchedResponse { status, body })
    }
}

fn classify(url: &str, e: reqwest::Error) -> MushafError {
    if e.is_timeout() {
        MushafError::Timeout(url.to_string())
    } else {
        MushafError::Network(format!("{}: {}", url, e))
    }
}
