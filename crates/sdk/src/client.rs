//! Main client for the Litcal SDK.

use crate::api::CalendarsApi;
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::ApiResult;
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with the Liturgical Calendar API.
#[derive(Debug, Clone)]
pub struct LitcalClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl LitcalClient {
    /// Create a new client builder.
    pub fn builder() -> LitcalClientBuilder {
        LitcalClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> ApiResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Get the calendars API.
    pub fn calendars(&self) -> CalendarsApi<'_> {
        CalendarsApi::new(self)
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Builder for creating a Litcal client.
#[derive(Debug, Clone)]
pub struct LitcalClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl LitcalClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Set the base URL of the API. Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<LitcalClient> {
        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let mut config = ClientConfig::new(base_url);
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }

        LitcalClient::from_config(config)
    }
}

impl Default for LitcalClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
