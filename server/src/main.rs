mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let app = routes::leptos_app(&config)?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, assets_dir = %config.assets_dir.display(), "undangan listening");
    axum::serve(listener, app).await?;
    Ok(())
}
