//! Alpaca External Adapter Binary
//!
//! Starts the job adapter HTTP server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin alpaca-external-adapter
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `APCA_API_KEY_ID`: Alpaca API key
//! - `APCA_API_SECRET_KEY`: Alpaca API secret
//!
//! ## Optional
//! - `ALPACA_ENV`: PAPER | LIVE (default: PAPER)
//! - `EA_HOST`: listen host (default: 172.17.0.1)
//! - `EA_PORT`: listen port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use alpaca_external_adapter::AlpacaClient;
use alpaca_external_adapter::config::{AlpacaConfig, AlpacaEnvironment};
use alpaca_external_adapter::server::{AdapterServer, create_router};

/// Default listen host.
const DEFAULT_HOST: &str = "172.17.0.1";

/// Default listen port.
const DEFAULT_PORT: u16 = 8080;

/// Parsed configuration from environment variables.
struct AdapterSettings {
    environment: AlpacaEnvironment,
    host: String,
    port: u16,
    api_key: String,
    api_secret: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting Alpaca External Adapter");

    let settings = parse_settings()?;
    log_settings(&settings);

    let client = AlpacaClient::new(&AlpacaConfig::new(
        settings.api_key.clone(),
        settings.api_secret.clone(),
        settings.environment,
    ))?;

    let app = create_router(AdapterServer::new(client));

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid listen address {}:{}",
                settings.host, settings.port
            )
        })?;

    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /equitiesprice");
    tracing::info!("  POST /cryptoprice");
    tracing::info!("  POST /cryptoaskingsize");
    tracing::info!("  POST /alpacatrade");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Adapter stopped");
    Ok(())
}

/// Initialize the tracing subscriber with environment filter.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "alpaca_external_adapter=info"
                    .parse()
                    .expect("static directive 'alpaca_external_adapter=info' is valid"),
            ),
        )
        .init();
}

/// Parse configuration from environment variables.
fn parse_settings() -> anyhow::Result<AdapterSettings> {
    let env = std::env::var("ALPACA_ENV")
        .unwrap_or_else(|_| "PAPER".to_string())
        .to_uppercase();
    let environment = match env.as_str() {
        "LIVE" => AlpacaEnvironment::Live,
        _ => AlpacaEnvironment::Paper,
    };

    let api_key = std::env::var("APCA_API_KEY_ID").unwrap_or_default();
    let api_secret = std::env::var("APCA_API_SECRET_KEY").unwrap_or_default();

    if api_key.is_empty() || api_secret.is_empty() {
        anyhow::bail!(
            "APCA_API_KEY_ID and APCA_API_SECRET_KEY environment variables are required"
        );
    }

    let host = std::env::var("EA_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port: u16 = std::env::var("EA_PORT")
        .unwrap_or_else(|_| DEFAULT_PORT.to_string())
        .parse()
        .unwrap_or(DEFAULT_PORT);

    Ok(AdapterSettings {
        environment,
        host,
        port,
        api_key,
        api_secret,
    })
}

/// Log the parsed configuration.
fn log_settings(settings: &AdapterSettings) {
    tracing::info!(
        environment = %settings.environment,
        host = %settings.host,
        port = settings.port,
        "Configuration loaded"
    );
}

/// Load .env file from the current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed; a process that cannot
/// respond to termination signals should fail at startup instead.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
