//! Service entrypoint: env config, tracing, router, serve loop.

use notes_api::{app, AppState, NoteService, NoteStore, ServerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("notes_api=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let store = Arc::new(NoteStore::new());
    let state = AppState {
        service: NoteService::new(store),
    };

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
