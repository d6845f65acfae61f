//! Trade execution job.

use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{JobReply, JobRequest, require_qty, require_str, run};
use crate::alpaca::{AlpacaClient, OrderRequest};

/// Payload for the trade job.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TradeData {
    /// Symbol to trade.
    pub symbol: Option<String>,
    /// Quantity of shares or coins.
    pub qty: Option<Decimal>,
    /// Order side, `buy` or `sell`.
    pub side: Option<String>,
}

/// Successful trade reply.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeStatus {
    /// Job run identifier.
    pub job_run_id: i64,
    /// Order status reported by the broker.
    pub order_status: String,
}

/// Place a market day order for the given symbol, quantity and side.
pub async fn alpaca_trade(
    client: &AlpacaClient,
    request: JobRequest<TradeData>,
) -> (StatusCode, JobReply<TradeStatus>) {
    let job_run_id = request.job_run_id();
    run(job_run_id, async move {
        let symbol = require_str(request.data.symbol, "Symbol")?;
        let qty = require_qty(request.data.qty, "Quantity")?;
        let side = require_str(request.data.side, "Buy/Sell Side")?;

        let order = OrderRequest::market_day(symbol, qty.to_string(), side);
        let (status, ack) = client.place_order(&order).await?;
        Ok((
            status,
            TradeStatus {
                job_run_id,
                order_status: ack.status,
            },
        ))
    })
    .await
}
