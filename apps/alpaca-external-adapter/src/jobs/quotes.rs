//! Quote jobs: equities price, crypto price, crypto asking size.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::{JobReply, JobRequest, require_str, run};
use crate::alpaca::AlpacaClient;

/// Payload for the equities price job.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EquitiesPriceData {
    /// Equity symbol, e.g. `AAPL`.
    pub symbol: Option<String>,
}

/// Payload for the crypto price and asking size jobs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CryptoQuoteData {
    /// Crypto exchange code, e.g. `CBSE`.
    pub exchange: Option<String>,
    /// Crypto symbol, e.g. `BTCUSD`.
    pub symbol: Option<String>,
}

/// Successful equities price reply.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityPrice {
    /// Job run identifier.
    pub job_run_id: i64,
    /// Ask price in dollars.
    pub price: f64,
}

/// Successful crypto price reply.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoPrice {
    /// Job run identifier.
    pub job_run_id: i64,
    /// Ask price in integer cents; downstream oracle consumers only
    /// handle integers. Equities intentionally stay in dollars.
    pub price: i64,
}

/// Successful asking size reply.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskingSize {
    /// Job run identifier.
    pub job_run_id: i64,
    /// Ask size.
    pub asking_size: f64,
}

/// Latest ask price for an equity symbol, in dollars.
pub async fn equities_price(
    client: &AlpacaClient,
    request: JobRequest<EquitiesPriceData>,
) -> (StatusCode, JobReply<EquityPrice>) {
    let job_run_id = request.job_run_id();
    run(job_run_id, async move {
        let symbol = require_str(request.data.symbol, "Symbol")?;
        let (status, body) = client.latest_equity_quote(&symbol).await?;
        Ok((
            status,
            EquityPrice {
                job_run_id,
                price: body.quote.ap,
            },
        ))
    })
    .await
}

/// Latest ask price for a crypto symbol, floored to integer cents.
pub async fn crypto_price(
    client: &AlpacaClient,
    request: JobRequest<CryptoQuoteData>,
) -> (StatusCode, JobReply<CryptoPrice>) {
    let job_run_id = request.job_run_id();
    run(job_run_id, async move {
        let exchange = require_str(request.data.exchange, "Exchange")?;
        let symbol = require_str(request.data.symbol, "Symbol")?;
        let (status, body) = client.latest_crypto_quote(&symbol, &exchange).await?;
        Ok((
            status,
            CryptoPrice {
                job_run_id,
                price: to_cents(body.quote.ap),
            },
        ))
    })
    .await
}

/// Latest ask size for a crypto symbol.
pub async fn crypto_asking_size(
    client: &AlpacaClient,
    request: JobRequest<CryptoQuoteData>,
) -> (StatusCode, JobReply<AskingSize>) {
    let job_run_id = request.job_run_id();
    run(job_run_id, async move {
        let exchange = require_str(request.data.exchange, "Exchange")?;
        let symbol = require_str(request.data.symbol, "Symbol")?;
        let (status, body) = client.latest_crypto_quote(&symbol, &exchange).await?;
        Ok((
            status,
            AskingSize {
                job_run_id,
                asking_size: body.quote.ask_size,
            },
        ))
    })
    .await
}

/// Dollars to integer cents, flooring fractional cents.
fn to_cents(price: f64) -> i64 {
    (price * 100.0).floor() as i64
}
