//! Aercast forecast service.
//!
//! Run with: cargo run -p aercast-web

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use aercast_forecast::history::GoogleHistoryClient;
use aercast_web::config::Config;
use aercast_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    dotenvy::dotenv().ok();

    let config = Config::load()?;
    let history = GoogleHistoryClient::new(config.api_key()?)?;

    let state = AppState {
        history: Arc::new(history),
        lookback_days: config.lookback_days,
    };
    let app = aercast_web::router::build_router(state);

    let addr: SocketAddr = config.bind.parse()?;
    info!("Forecast service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
