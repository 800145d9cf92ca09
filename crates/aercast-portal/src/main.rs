//! Aercast portal service.
//!
//! Run with: cargo run -p aercast-portal

use std::net::SocketAddr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use aercast_portal::config::Config;
use aercast_portal::state::PortalState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load()?;
    let app = aercast_portal::router::build_router(PortalState::new());

    let addr: SocketAddr = config.bind.parse()?;
    info!("Portal listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
