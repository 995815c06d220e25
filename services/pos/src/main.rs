//! Point-of-sale HTTP API server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin pos
//! POS_PORT=9000 POS_SEED_CATALOG=false cargo run --bin pos
//! ```
//!
//! # Example Requests
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/products \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Widget", "price": 9.99, "category": "Tools", "stock": 10}'
//!
//! curl -X POST http://localhost:8080/api/orders \
//!   -H "Content-Type: application/json" \
//!   -d '{"items": [{"product_id": "6", "quantity": 3}]}'
//!
//! curl http://localhost:8080/api/products/6
//! ```

use anyhow::Context;
use pos::{Config, PosStore, pos_router};
use resource_core::environment::SystemClock;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pos=info,resource_web=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(?config, "Starting point-of-sale service");

    let clock = Arc::new(SystemClock);
    let store = if config.seed_catalog {
        PosStore::seeded(clock)
    } else {
        PosStore::new(clock)
    };
    let app = pos_router(Arc::new(store), &config);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Point-of-sale API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Point-of-sale service stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C signal, shutting down gracefully..."),
        () = terminate => info!("Received SIGTERM signal, shutting down gracefully..."),
    }
}
