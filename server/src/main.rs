use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use sponsorgo_server::config::Config;
use sponsorgo_server::review::ReviewStore;
use sponsorgo_server::routes::create_routes;
use sponsorgo_server::state::AppState;

const DEFAULT_LOG_FILTER: &str = "sponsorgo_server=info,tower_http=info";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();
    let store = ReviewStore::open(config.store_path.clone()).await;
    let addr = config.bind_addr;

    let app = create_routes(AppState::new(config, store));

    tracing::info!("🚀 Server running at http://{}", addr);
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
