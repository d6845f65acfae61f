//! HTTP/JSON API server implementation.
//!
//! One POST route per job variant. Handlers stay thin: deserialize the
//! envelope, run the job, and return the status/result pair the job
//! produced.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};

use crate::alpaca::AlpacaClient;
use crate::jobs::JobRequest;
use crate::jobs::quotes::{self, CryptoQuoteData, EquitiesPriceData};
use crate::jobs::trade::{self, TradeData};

/// Shared state for the HTTP server.
#[derive(Clone)]
pub struct AdapterServer {
    client: Arc<AlpacaClient>,
}

impl AdapterServer {
    /// Create a new adapter server.
    #[must_use]
    pub fn new(client: AlpacaClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

/// Create the Axum router with all endpoints.
#[must_use]
pub fn create_router(server: AdapterServer) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/equitiesprice", post(equities_price))
        .route("/cryptoprice", post(crypto_price))
        .route("/cryptoaskingsize", post(crypto_asking_size))
        .route("/alpacatrade", post(alpaca_trade))
        .with_state(server)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Equities ask price endpoint.
async fn equities_price(
    State(server): State<AdapterServer>,
    Json(request): Json<JobRequest<EquitiesPriceData>>,
) -> impl IntoResponse {
    let (status, reply) = quotes::equities_price(&server.client, request).await;
    (status, Json(reply))
}

/// Crypto ask price endpoint.
async fn crypto_price(
    State(server): State<AdapterServer>,
    Json(request): Json<JobRequest<CryptoQuoteData>>,
) -> impl IntoResponse {
    let (status, reply) = quotes::crypto_price(&server.client, request).await;
    (status, Json(reply))
}

/// Crypto ask size endpoint.
async fn crypto_asking_size(
    State(server): State<AdapterServer>,
    Json(request): Json<JobRequest<CryptoQuoteData>>,
) -> impl IntoResponse {
    let (status, reply) = quotes::crypto_asking_size(&server.client, request).await;
    (status, Json(reply))
}

/// Trade execution endpoint.
async fn alpaca_trade(
    State(server): State<AdapterServer>,
    Json(request): Json<JobRequest<TradeData>>,
) -> impl IntoResponse {
    let (status, reply) = trade::alpaca_trade(&server.client, request).await;
    (status, Json(reply))
}
