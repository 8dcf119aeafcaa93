//! Shared HTTP plumbing for exchange clients.

use std::time::Duration;

use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ConfigError, ExchangeError, Result};

/// HTTP client configuration shared by every venue.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// Total request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    27_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    3_000
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
        }
    }
}

impl HttpSettings {
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http.timeout_ms",
                reason: "must be greater than 0".into(),
            });
        }
        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http.connect_timeout_ms",
                reason: "must be greater than 0".into(),
            });
        }
        Ok(())
    }

    /// Build a `reqwest` client honouring these timeouts.
    #[must_use]
    pub fn build_client(&self) -> HttpClient {
        HttpClient::builder()
            .timeout(Duration::from_millis(self.timeout_ms))
            .connect_timeout(Duration::from_millis(self.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            })
    }
}

/// Check the status of `response` and decode its JSON body.
pub async fn read_json<T>(venue: &'static str, response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!(venue, status = status.as_u16(), "Exchange returned error status");
        return Err(ExchangeError::Status {
            venue,
            status: status.as_u16(),
            body,
        }
        .into());
    }

    debug!(venue, bytes = body.len(), "Received response body");
    Ok(serde_json::from_str(&body)?)
}

/// Validate a base URL setting.
pub fn validate_base_url(field: &'static str, value: &str) -> std::result::Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field });
    }
    url::Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_connect_and_read_budget() {
        let settings = HttpSettings::default();
        assert_eq!(settings.connect_timeout_ms, 3_000);
        assert_eq!(settings.timeout_ms, 27_000);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn zero_timeouts_rejected() {
        let settings = HttpSettings {
            timeout_ms: 0,
            ..HttpSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidValue {
                field: "http.timeout_ms",
                ..
            })
        ));

        let settings = HttpSettings {
            connect_timeout_ms: 0,
            ..HttpSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidValue {
                field: "http.connect_timeout_ms",
                ..
            })
        ));
    }

    #[test]
    fn base_url_validation() {
        assert!(validate_base_url("base_url", "https://api.delta.exchange").is_ok());
        assert!(matches!(
            validate_base_url("base_url", "  "),
            Err(ConfigError::MissingField { field: "base_url" })
        ));
        assert!(matches!(
            validate_base_url("base_url", "not a url"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
