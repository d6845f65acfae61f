//! Alpaca REST client.
//!
//! One client instance is shared across all inbound calls; it is
//! read-only for the process lifetime. Requests carry the two static
//! credential headers and are issued without retries or timeouts.

mod api_types;

pub use api_types::{LatestQuote, OrderAck, OrderRequest, QuoteData};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::AlpacaConfig;
use crate::error::AdapterError;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "APCA-API-KEY-ID";

/// Header carrying the API secret.
const API_SECRET_HEADER: &str = "APCA-API-SECRET-KEY";

/// HTTP client for the Alpaca quote and trading APIs.
#[derive(Debug, Clone)]
pub struct AlpacaClient {
    http: reqwest::Client,
    api_key: String,
    api_secret: String,
    trading_url: String,
    data_url: String,
}

impl AlpacaClient {
    /// Create a new client from config.
    pub fn new(config: &AlpacaConfig) -> Result<Self, AdapterError> {
        if config.api_key.is_empty() || config.api_secret.is_empty() {
            return Err(AdapterError::AuthenticationFailed);
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AdapterError::Network(e.to_string()))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            trading_url: config.trading_base_url().to_string(),
            data_url: config.data_base_url().to_string(),
        })
    }

    /// Override the market data base URL.
    #[must_use]
    pub fn with_data_url(mut self, url: impl Into<String>) -> Self {
        self.data_url = url.into();
        self
    }

    /// Override the trading base URL.
    #[must_use]
    pub fn with_trading_url(mut self, url: impl Into<String>) -> Self {
        self.trading_url = url.into();
        self
    }

    /// Fetch the latest quote for an equity symbol.
    pub async fn latest_equity_quote(
        &self,
        symbol: &str,
    ) -> Result<(StatusCode, LatestQuote), AdapterError> {
        let url = format!("{}/v2/stocks/{}/quotes/latest", self.data_url, symbol);
        self.get_json(&url).await
    }

    /// Fetch the latest quote for a crypto symbol on the given exchange.
    pub async fn latest_crypto_quote(
        &self,
        symbol: &str,
        exchange: &str,
    ) -> Result<(StatusCode, LatestQuote), AdapterError> {
        let url = format!(
            "{}/v1beta1/crypto/{}/quotes/latest?exchange={}",
            self.data_url, symbol, exchange
        );
        self.get_json(&url).await
    }

    /// Place an order through the trading API.
    pub async fn place_order(
        &self,
        order: &OrderRequest,
    ) -> Result<(StatusCode, OrderAck), AdapterError> {
        let url = format!("{}/v2/orders", self.trading_url);
        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_SECRET_HEADER, &self.api_secret)
            .json(order)
            .send()
            .await
            .map_err(|e| AdapterError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    /// Make a GET request with the credential headers attached.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<(StatusCode, T), AdapterError> {
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_SECRET_HEADER, &self.api_secret)
            .send()
            .await
            .map_err(|e| AdapterError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    /// Decode a response body, preserving the upstream status.
    ///
    /// The status is returned even when it is not a success code; a body
    /// that does not match the expected shape is a parse failure.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<(StatusCode, T), AdapterError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AdapterError::Network(e.to_string()))?;
        let body =
            serde_json::from_str(&text).map_err(|e| AdapterError::JsonParse(e.to_string()))?;
        Ok((status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlpacaEnvironment;

    fn paper_config(key: &str, secret: &str) -> AlpacaConfig {
        AlpacaConfig::new(key.to_string(), secret.to_string(), AlpacaEnvironment::Paper)
    }

    #[test]
    fn client_creation_fails_empty_credentials() {
        let result = AlpacaClient::new(&paper_config("", "secret"));
        assert!(matches!(result, Err(AdapterError::AuthenticationFailed)));

        let result = AlpacaClient::new(&paper_config("key", ""));
        assert!(matches!(result, Err(AdapterError::AuthenticationFailed)));
    }

    #[test]
    fn client_uses_environment_urls() {
        let client = AlpacaClient::new(&paper_config("key", "secret")).unwrap();
        assert_eq!(client.trading_url, "https://paper-api.alpaca.markets");
        assert_eq!(client.data_url, "https://data.alpaca.markets");
    }

    #[test]
    fn base_url_overrides() {
        let client = AlpacaClient::new(&paper_config("key", "secret"))
            .unwrap()
            .with_data_url("http://localhost:9100")
            .with_trading_url("http://localhost:9200");
        assert_eq!(client.data_url, "http://localhost:9100");
        assert_eq!(client.trading_url, "http://localhost:9200");
    }
}
