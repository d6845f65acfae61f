//! Server implementation.
//!
//! This module provides the HTTP/JSON surface for the four job
//! endpoints.

mod http;

pub use http::{AdapterServer, create_router};
