//! HTTP fetching through the page cache.

use crate::cache::PageCache;
use crate::error::CliError;
use std::path::PathBuf;
use url::Url;

pub struct Fetcher {
    client: reqwest::Client,
    cache_path: PathBuf,
}

impl Fetcher {
    pub fn new(cache_path: PathBuf) -> Self {
        Self {
            client: reqwest::Client::new(),
            cache_path,
        }
    }

    /// Fetch `url`, answering from the cache when `use_cache` is set.
    ///
    /// Fresh downloads are always written back to the cache, even with
    /// caching disabled, so the next cached run sees the newest copy.
    pub async fn page(&self, url: &Url, use_cache: bool) -> Result<String, CliError> {
        let mut cache = PageCache::load(&self.cache_path);
        log::debug!("cache holds {} pages", cache.len());

        if use_cache {
            if let Some(html) = cache.get(url.as_str()) {
                log::info!("cached: {} ({url})", url.path());
                return Ok(html.to_string());
            }
        }

        log::info!("retrieving: {} ({url})", url.path());
        let html = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        cache.insert(url.as_str(), &html);
        cache.store(&self.cache_path)?;
        Ok(html)
    }
}
