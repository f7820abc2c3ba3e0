//! Configuration types for the Litcal SDK.

use std::time::Duration;
use url::Url;

/// Public endpoint of the Liturgical Calendar API.
pub const DEFAULT_BASE_URL: &str = "https://litcal.johnromanodorazio.com/api/dev/";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Litcal client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API. Always ends with `/` so relative paths join below it.
    pub base_url: Url,
    /// Request timeout.
    pub timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: with_trailing_slash(base_url),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("litcal-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

// `Url::join("calendar")` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
