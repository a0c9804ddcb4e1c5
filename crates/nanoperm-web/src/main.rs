//! nanoperm web server
//!
//! Run with: cargo run -p nanoperm-web

use std::net::SocketAddr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting nanoperm web server...");

    let state = nanoperm_web::state::AppState::new();
    let app = nanoperm_web::router::build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3001));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
