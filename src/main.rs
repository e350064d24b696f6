mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::AppError,
    service::flight::FlightCache,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let flight_cache = FlightCache::new(config.available_flights_cache_ttl);

    let router = server::router::router().with_state(AppState::new(
        db,
        flight_cache,
        config.app_name.clone(),
    ));

    let listener = TcpListener::bind(&config.bind_address).await?;

    tracing::info!(address = %config.bind_address, app = %config.app_name, "Starting server");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
