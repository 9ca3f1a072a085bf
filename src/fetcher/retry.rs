use std::sync::Arc;
use std::time::Duration;

use crate::app::{MushafError, Result};
use crate::fetcher::{FetchedResponse, Fetcher};

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Wraps a [`Fetcher`] with a per-attempt deadline and bounded retries.
///
/// Each attempt is raced against a timer; an elapsed timer abandons the
/// in-flight call and counts as a `Timeout` failure. Failed attempts are
/// retried immediately, with no backoff, up to `max_retries` additional
/// attempts. A response with a non-2xx status is still a successful fetch
/// here; only transport-level failures are retried.
pub struct ResilientFetcher {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    max_retries: u32,
    timeout: Duration,
}

impl ResilientFetcher {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self::with_policy(fetcher, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT)
    }

    pub fn with_policy(
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        max_retries: u32,
        timeout: Duration,
    ) -> Self {
        Self {
            fetcher,
            max_retries,
            timeout,
        }
    }

    pub async fn get(&self, url: &str) -> Result<FetchedResponse> {
        let mut remaining = self.max_retries;

        loop {
            let err = match tokio::time::timeout(self.timeout, self.fetcher.fetch(url)).await {
                Ok(Ok(response)) => return Ok(response),
                Ok(Err(e)) => e,
                Err(_) => MushafError::Timeout(url.to_string()),
            };

            if remaining == 0 {
                return Err(err);
            }
            remaining -= 1;
            tracing::debug!("Retrying {} after failure: {} ({} left)", url, err, remaining);
        }
    }
}
