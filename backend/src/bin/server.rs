//! Disaster dashboard HTTP server binary.
//!
//! Loads the EM-DAT spreadsheet once, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! DATA_PATH=data/emdat.xlsx cargo run --bin disaster-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Path to a `dashboard.toml` (default: searched)
//! - `HOST`: Server host (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8050)
//! - `DATA_PATH`: Spreadsheet or CSV export to load
//! - `DATA_SHEET`: Workbook sheet name (default: EM-DAT Data (Original))
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use disaster_dash::config::DashboardConfig;
use disaster_dash::db::repository::EventRepository;
use disaster_dash::db::LocalRepository;
use disaster_dash::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting disaster dashboard server");

    let config = DashboardConfig::load().context("Failed to load configuration")?;

    let repository = LocalRepository::from_file(&config.data.path, &config.data.sheet)
        .with_context(|| format!("Failed to load event table from {}", config.data.path.display()))?;
    info!(
        events = repository.len(),
        groups = repository.disaster_groups().len(),
        countries = repository.countries().len(),
        "Event table loaded"
    );

    let state = AppState::new(
        Arc::new(repository) as Arc<dyn EventRepository>,
        config.settings(),
    )
    .with_session_limits(config.session_limits());
    let app = create_router(state);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
