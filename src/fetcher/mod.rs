pub mod http_fetcher;
pub mod retry;

use async_trait::async_trait;

use crate::app::Result;

pub use http_fetcher::HttpFetcher;
pub use retry::ResilientFetcher;

/// One completed HTTP exchange.
///
/// A non-2xx status is not an error at this layer; callers inspect
/// [`FetchedResponse::status`] and decide.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchedResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedResponse>;
}

#[cfg(test)]
pub mod testing {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::{FetchedResponse, Fetcher};
    use crate::app::{MushafError, Result};

    /// Test double keyed by URL. Each URL holds a queue of scripted
    /// results; URLs with an exhausted or absent queue fail with a network
    /// error, so retry exhaustion is the default behavior.
    #[derive(Default)]
    pub struct MapFetcher {
        responses: Mutex<HashMap<String, Vec<Result<FetchedResponse>>>>,
    }

    impl MapFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn ok_json(self, url: &str, body: &str) -> Self {
            self.push(
                url,
                Ok(FetchedResponse {
                    status: 200,
                    body: body.as_bytes().to_vec(),
                }),
            )
        }

        pub fn status(self, url: &str, status: u16) -> Self {
            self.push(
                url,
                Ok(FetchedResponse {
                    status,
                    body: Vec::new(),
                }),
            )
        }

        pub fn push(self, url: &str, result: Result<FetchedResponse>) -> Self {
            {
                let mut responses = self.responses.lock().unwrap();
                let queue = responses.entry(url.to_string()).or_default();
                queue.insert(0, result);
            }
            self
        }
    }

    #[async_trait]
    impl Fetcher for MapFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchedResponse> {
            self.responses
                .lock()
                .unwrap()
                .get_mut(url)
                .and_then(Vec::pop)
                .unwrap_or_else(|| Err(MushafError::Network(format!("no response for {}", url))))
        }
    }
}
