// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::needless_pass_by_value
    )
)]

//! Alpaca External Adapter - Library
//!
//! Bridges oracle job requests to the Alpaca brokerage API. Each inbound
//! job carries `{ id, data }`; the adapter validates the payload, issues
//! exactly one request to Alpaca, and reshapes the response into the
//! fixed job-result envelope.
//!
//! # Layout
//!
//! - `config`: Alpaca environments and client configuration
//! - `alpaca`: REST client for the quote and trading APIs
//! - `jobs`: the shared job contract and the four operations
//! - `server`: axum HTTP surface

/// Alpaca client configuration.
pub mod config;

/// Adapter error types.
pub mod error;

/// Alpaca REST client and API types.
pub mod alpaca;

/// Job contract and the four job operations.
pub mod jobs;

/// HTTP server surface.
pub mod server;

pub use alpaca::AlpacaClient;
pub use config::{AlpacaConfig, AlpacaEnvironment};
pub use error::AdapterError;
pub use jobs::{JobError, JobReply, JobRequest};
pub use server::{AdapterServer, create_router};
