mod api;
mod config;
mod infrastructure;
mod state;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app_router;
use config::ServerConfig;
use state::AppContext;

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before any configuration is read
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Fivetran Universal Connector");

    let config = ServerConfig::from_env()?;

    let context = AppContext::new();
    let app = app_router(context);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("API server listening on {}", config.bind_addr());

    let api_server = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("API server failed: {}", e);
        }
    });

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
        _ = api_server => {
            info!("API server stopped");
        }
    }

    info!("Shutting down...");

    Ok(())
}
