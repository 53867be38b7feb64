//! Top-level client
//!
//! Owns one [`HttpClient`] and hands out borrowing accessors for each
//! endpoint group, so every accessor shares the same connection pool and
//! signing credentials.

use crate::asset::AssetApi;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::PaginationConfig;
use crate::trade::TradeApi;
use tracing::debug;

/// Bybit REST client
#[derive(Debug)]
pub struct BybitClient {
    http: HttpClient,
    pagination: PaginationConfig,
}

impl BybitClient {
    /// Build from a validated configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http_config = config.http_client_config();
        let http = match config.credentials() {
            Some(credentials) => HttpClient::with_credentials(http_config, credentials)?,
            None => HttpClient::with_config(http_config)?,
        };

        debug!(
            base_url = %http.config().base_url,
            authenticated = http.is_authenticated(),
            "client ready"
        );

        Ok(Self {
            http,
            pagination: config.pagination.clone(),
        })
    }

    /// Wrap an existing transport client
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            pagination: PaginationConfig::default(),
        }
    }

    /// Override the pagination bound
    #[must_use]
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    /// Asset endpoints
    pub fn asset(&self) -> AssetApi<&HttpClient> {
        AssetApi::new(&self.http).with_pagination(self.pagination.clone())
    }

    /// Trade endpoints
    pub fn trade(&self) -> TradeApi<&HttpClient> {
        TradeApi::new(&self.http)
    }

    /// Underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn pagination(&self) -> &PaginationConfig {
        &self.pagination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::TESTNET_URL;

    #[test]
    fn test_from_config_unsigned() {
        let client = BybitClient::from_config(&ClientConfig::default()).unwrap();
        assert!(!client.http().is_authenticated());
        assert_eq!(client.pagination().max_pages, None);
    }

    #[test]
    fn test_from_config_signed_testnet() {
        let config = ClientConfig {
            api_key: Some("key".to_string()),
            api_secret: Some("secret".to_string()),
            testnet: true,
            pagination: PaginationConfig::bounded(5),
            ..ClientConfig::default()
        };
        let client = BybitClient::from_config(&config).unwrap();

        assert!(client.http().is_authenticated());
        assert_eq!(client.http().config().base_url, TESTNET_URL);
        assert_eq!(client.pagination().max_pages, Some(5));
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = ClientConfig {
            api_secret: Some("secret".to_string()),
            ..ClientConfig::default()
        };
        assert!(BybitClient::from_config(&config).is_err());
    }
}
