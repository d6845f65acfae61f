//! Alpaca client configuration.

/// Environment for the Alpaca API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlpacaEnvironment {
    /// Paper trading (simulated).
    #[default]
    Paper,
    /// Live trading (real money).
    Live,
}

impl AlpacaEnvironment {
    /// Get the base URL for the trading API.
    #[must_use]
    pub const fn trading_base_url(&self) -> &'static str {
        match self {
            Self::Paper => "https://paper-api.alpaca.markets",
            Self::Live => "https://api.alpaca.markets",
        }
    }

    /// Get the base URL for the market data API.
    #[must_use]
    pub const fn data_base_url(&self) -> &'static str {
        "https://data.alpaca.markets"
    }

    /// Check if this is live trading.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }
}

impl std::fmt::Display for AlpacaEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paper => write!(f, "PAPER"),
            Self::Live => write!(f, "LIVE"),
        }
    }
}

/// Configuration for the Alpaca client.
///
/// Constructed once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AlpacaConfig {
    /// API key, sent as the `APCA-API-KEY-ID` header.
    pub api_key: String,
    /// API secret, sent as the `APCA-API-SECRET-KEY` header.
    pub api_secret: String,
    /// Trading environment.
    pub environment: AlpacaEnvironment,
}

impl AlpacaConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(api_key: String, api_secret: String, environment: AlpacaEnvironment) -> Self {
        Self {
            api_key,
            api_secret,
            environment,
        }
    }

    /// Get the trading API base URL.
    #[must_use]
    pub const fn trading_base_url(&self) -> &'static str {
        self.environment.trading_base_url()
    }

    /// Get the data API base URL.
    #[must_use]
    pub const fn data_base_url(&self) -> &'static str {
        self.environment.data_base_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paper_environment_urls() {
        let env = AlpacaEnvironment::Paper;
        assert!(env.trading_base_url().contains("paper"));
        assert!(!env.is_live());
    }

    #[test]
    fn live_environment_urls() {
        let env = AlpacaEnvironment::Live;
        assert!(!env.trading_base_url().contains("paper"));
        assert!(env.is_live());
    }

    #[test]
    fn data_url_is_environment_independent() {
        assert_eq!(
            AlpacaEnvironment::Paper.data_base_url(),
            AlpacaEnvironment::Live.data_base_url()
        );
    }

    #[test]
    fn config_creation() {
        let config = AlpacaConfig::new(
            "key".to_string(),
            "secret".to_string(),
            AlpacaEnvironment::Paper,
        );
        assert_eq!(config.api_key, "key");
        assert_eq!(config.api_secret, "secret");
        assert!(!config.environment.is_live());
    }

    #[test]
    fn environment_display() {
        assert_eq!(format!("{}", AlpacaEnvironment::Paper), "PAPER");
        assert_eq!(format!("{}", AlpacaEnvironment::Live), "LIVE");
    }

    #[test]
    fn environment_defaults_to_paper() {
        assert_eq!(AlpacaEnvironment::default(), AlpacaEnvironment::Paper);
    }
}
