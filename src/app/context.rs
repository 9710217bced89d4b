use std::sync::Arc;

use crate::app::Result;
use crate::config::{ApiConfig, Config, ViewConfig};
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;

/// Collaborators shared by every navigation.
pub struct AppContext {
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub api: ApiConfig,
    pub view: ViewConfig,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.api)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self {
            fetcher,
            api: config.api,
            view: config.view,
        }
    }
}
