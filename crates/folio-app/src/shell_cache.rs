// Rust guideline compliant 2026-10-17

//! Cache-first storage for the application shell.

use crate::error::Result;
use crate::ports::ResourceFetcher;
use std::collections::BTreeMap;

/// Name of the current shell cache.
pub const CACHE_NAME: &str = "folio-shell-v1";

/// Resources pre-cached on install.
pub const SHELL_URLS: [&str; 4] = ["/", "/index.html", "/manifest.json", "/favicon.ico"];

/// Named caches of resource bodies, keyed by path.
#[derive(Debug, Clone)]
pub struct ShellCache {
    caches: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
    name: String,
}

impl Default for ShellCache {
    fn default() -> Self {
        Self::new(CACHE_NAME)
    }
}

impl ShellCache {
    /// Creates storage whose active cache is `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            caches: BTreeMap::new(),
            name: name.into(),
        }
    }

    /// Returns the active cache name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns every cache name present.
    #[must_use]
    pub fn cache_names(&self) -> Vec<String> {
        self.caches.keys().cloned().collect()
    }

    /// Stores a body in a named cache.
    pub fn put(&mut self, cache: &str, path: &str, body: Vec<u8>) {
        self.caches
            .entry(cache.to_string())
            .or_default()
            .insert(path.to_string(), body);
    }

    /// Returns a cached body from the active cache.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&[u8]> {
        self.caches
            .get(&self.name)
            .and_then(|cache| cache.get(path))
            .map(Vec::as_slice)
    }

    /// Fetches and stores every URL in the active cache.
    ///
    /// Nothing is stored unless every fetch succeeds.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error.
    pub async fn install(&mut self, urls: &[&str], fetcher: &dyn ResourceFetcher) -> Result<()> {
        let mut fetched = Vec::with_capacity(urls.len());
        for url in urls {
            fetched.push((*url, fetcher.fetch(url).await?));
        }
        let name = self.name.clone();
        for (url, body) in fetched {
            self.put(&name, url, body);
        }
        tracing::info!(cache = %self.name, count = urls.len(), "shell cached");
        Ok(())
    }

    /// Serves a request: the cached body if present, else the network.
    ///
    /// Network responses are not added to the cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource is not cached and the fetch fails.
    pub async fn fetch(&self, path: &str, fetcher: &dyn ResourceFetcher) -> Result<Vec<u8>> {
        if let Some(body) = self.lookup(path) {
            tracing::debug!(path, "shell cache hit");
            return Ok(body.to_vec());
        }
        fetcher.fetch(path).await
    }

    /// Deletes every cache whose name is not in `whitelist`.
    ///
    /// # Returns
    ///
    /// The names of the deleted caches.
    pub fn activate(&mut self, whitelist: &[&str]) -> Vec<String> {
        let stale: Vec<String> = self
            .caches
            .keys()
            .filter(|name| !whitelist.contains(&name.as_str()))
            .cloned()
            .collect();
        for name in &stale {
            self.caches.remove(name);
            tracing::info!(cache = %name, "stale cache deleted");
        }
        stale
    }
}
