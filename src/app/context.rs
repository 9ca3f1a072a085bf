use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::api::QuranApi;
use crate::app::{MushafError, Result};
use crate::assembler::ChapterAssembler;
use crate::config::Config;
use crate::fetcher::{Fetcher, HttpFetcher, ResilientFetcher};

/// Wires the upstream client and the assembler together for the server.
pub struct AppContext {
    pub api: Arc<QuranApi>,
    pub assembler: ChapterAssembler,
}

impl AppContext {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_fetcher(config, Arc::new(HttpFetcher::new()))
    }

    /// Build with an explicit [`Fetcher`], which tests use to inject doubles.
    pub fn with_fetcher(
        config: &Config,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
    ) -> Result<Self> {
        let base = Url::parse(&config.api_base_url)
            .map_err(|e| MushafError::Config(format!("api_base_url: {}", e)))?;

        let resilient = ResilientFetcher::with_policy(
            fetcher,
            config.fetch.max_retries,
            Duration::from_secs(config.fetch.timeout_secs),
        );

        let api = Arc::new(QuranApi::new(base, resilient));
        let assembler = ChapterAssembler::new(api.clone());

        Ok(Self { api, assembler })
    }
}
