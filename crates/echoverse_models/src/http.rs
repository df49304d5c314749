//! Shared HTTP client construction.

use echoverse_core::HttpSettings;
use echoverse_error::{ConfigError, EchoverseResult};
use reqwest::Client;

/// Build a reqwest client honouring the configured transport timeout.
pub(crate) fn build_client(http: &HttpSettings) -> EchoverseResult<Client> {
    Client::builder()
        .timeout(http.request_timeout())
        .build()
        .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)).into())
}
