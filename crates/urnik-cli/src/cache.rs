//! On-disk page cache: URL → downloaded HTML, stored as JSON.

use crate::error::CliError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PageCache {
    pages: BTreeMap<String, String>,
}

impl PageCache {
    /// Load the cache. A missing or unreadable file is an empty cache.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                log::debug!("no cache at {}: {e}", path.display());
                return Self::default();
            }
        };
        serde_json::from_str(&text).unwrap_or_else(|e| {
            log::warn!("ignoring corrupt cache {}: {e}", path.display());
            Self::default()
        })
    }

    pub fn store(&self, path: &Path) -> Result<(), CliError> {
        let json = serde_json::to_string(self).map_err(|source| CliError::Cache {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|e| CliError::io(path, e))
    }

    pub fn get(&self, url: &str) -> Option<&str> {
        self.pages.get(url).map(String::as_str)
    }

    pub fn insert(&mut self, url: &str, html: &str) {
        self.pages.insert(url.to_string(), html.to_string());
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn store_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");

        let mut cache = PageCache::default();
        cache.insert("https://example.org/a", "<p>a</p>");
        cache.store(&path).unwrap();

        let loaded = PageCache::load(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get("https://example.org/a"), Some("<p>a</p>"));
        assert_eq!(loaded.get("https://example.org/b"), None);
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(PageCache::load(&dir.path().join("nope.json")).len(), 0);
    }

    #[test]
    fn corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, b"\x80not json").unwrap();
        assert_eq!(PageCache::load(&path).len(), 0);
    }
}
