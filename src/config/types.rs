use serde::{Deserialize, Serialize};

/// Endpoint the catalog is fetched from out of the box.
pub const DEFAULT_CATALOG_URL: &str = "https://movies-f3fc9-default-rtdb.firebaseio.com/movies.json";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
}

/// Where and how the catalog is fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Catalog endpoint returning a JSON list of movies.
    #[serde(default = "default_url")]
    pub url: String,
    /// Upper bound on the whole request, in seconds (default: 30).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

fn default_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}
