use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use live_resolver::config::AppConfig;
use live_resolver::resolver::{LiveResolver, YouTubeApi};
use live_resolver::server::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "live_resolver=debug".into()),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    let resolver = match &config.youtube_api_key {
        Some(key) => Some(Arc::new(LiveResolver::new(YouTubeApi::new(key.clone())))),
        None => {
            tracing::warn!("YT_API_KEY not set; live lookups will be rejected");
            None
        }
    };

    let app = build_router(AppState { resolver });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("live-resolver listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
