//! Attriboard Web Server
//!
//! Run with: cargo run -p attriboard-web

use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use attriboard_data::DataContext;
use attriboard_web::config::Config;
use attriboard_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Attriboard dashboard server...");

    let config = Config::load()?;

    // Load the dataset once; a missing or malformed file aborts startup.
    let ctx = DataContext::load(&config.data.csv_path)?;

    let host: IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid server host: {}", config.server.host))?;
    let addr = SocketAddr::from((host, config.server.port));

    let state = AppState::new(config, ctx);
    let app = attriboard_web::router::build_router(state);

    info!("🚀 Server listening on http://{}", addr);
    info!("📊 Open your browser and navigate to http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
