use anyhow::{Context, Result};
use litcal_sdk::{LitcalClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

pub const ENV_API_BASE_URL: &str = "LITCAL_API_BASE_URL";
pub const ENV_DEFAULT_TIMEOUT: &str = "LITCAL_DEFAULT_TIMEOUT";

/// Runtime settings of the server.
///
/// Layered lowest to highest: built-in defaults, TOML file, environment,
/// command-line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Seconds; anything below 1 falls back to the default.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: i64,
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> i64 {
    DEFAULT_TIMEOUT.as_secs() as i64
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Load the TOML file at `config_path`, or defaults when it does not exist.
    pub fn load(config_path: &Path) -> Result<Self> {
        let config: Self = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?
        } else {
            info!(path = %config_path.display(), "Configuration file not found, using defaults");
            Self::default()
        };

        Ok(config.normalized())
    }

    /// Apply `LITCAL_API_BASE_URL` and `LITCAL_DEFAULT_TIMEOUT`.
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_BASE_URL).filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_DEFAULT_TIMEOUT) {
            match raw.trim().parse::<i64>() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => {
                    warn!(value = %raw, "Invalid {}, using {}s", ENV_DEFAULT_TIMEOUT, default_timeout_secs());
                    self.timeout_secs = default_timeout_secs();
                }
            }
        }

        self.normalized()
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, api_base_url: Option<String>, timeout_secs: Option<i64>) -> Self {
        if let Some(url) = api_base_url {
            self.api_base_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.timeout_secs = secs;
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        if self.timeout_secs <= 0 {
            warn!(
                timeout_secs = self.timeout_secs,
                "Timeout must be positive, using {}s",
                default_timeout_secs()
            );
            self.timeout_secs = default_timeout_secs();
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1) as u64)
    }

    /// Build the upstream client these settings describe.
    pub fn client(&self) -> Result<LitcalClient> {
        LitcalClient::builder()
            .base_url(self.api_base_url.as_str())
            .timeout(self.timeout())
            .build()
            .with_context(|| format!("Invalid API base URL: {}", self.api_base_url))
    }
}
