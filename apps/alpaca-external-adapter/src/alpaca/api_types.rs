//! Alpaca API request and response types.
//!
//! These types map directly to Alpaca's REST API format; only the fields
//! the adapter consumes are declared.

use serde::{Deserialize, Serialize};

/// Envelope around a latest-quote response.
#[derive(Debug, Clone, Deserialize)]
pub struct LatestQuote {
    /// The quote payload.
    pub quote: QuoteData,
}

/// Best-ask snapshot for a symbol.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteData {
    /// Ask price.
    pub ap: f64,
    /// Ask size.
    #[serde(rename = "as")]
    pub ask_size: f64,
}

/// Market order request for the Alpaca trading API.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    /// Symbol to trade.
    pub symbol: String,
    /// Quantity, serialized as a string per the Alpaca API.
    pub qty: String,
    /// Order side, `buy` or `sell`.
    pub side: String,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: &'static str,
    /// Time in force.
    pub time_in_force: &'static str,
}

impl OrderRequest {
    /// Build a market day order.
    #[must_use]
    pub fn market_day(symbol: String, qty: String, side: String) -> Self {
        Self {
            symbol,
            qty,
            side,
            order_type: "market",
            time_in_force: "day",
        }
    }
}

/// Subset of the order response consumed by the adapter.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderAck {
    /// Order status reported by Alpaca.
    pub status: String,
}
