//! Configuration model loaded from external sources.

use serde::Deserialize;
use url::Url;

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_cache_capacity() -> usize {
    256
}

fn default_cache_ttl_secs() -> u64 {
    300
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Key material for the flash message cookies, at least 64 bytes.
    pub secret: String,
    /// Base URL of the stats backend, e.g. `http://localhost:8000/api/v1/`.
    pub backend_url: Url,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Number of search pages kept in memory; 0 disables the cache.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    /// Seconds a cached search page is served before it is fetched again.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}
