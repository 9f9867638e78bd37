use bikeshare_server::cache::CachedTripSource;
use bikeshare_server::config::ServerConfig;
use bikeshare_server::store::{TripStore, load_trips_from_path};
use bikeshare_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Load trip data (fail fast if unavailable)
    info!(path = %config.csv_path.display(), "loading trip data");
    let loaded = load_trips_from_path(&config.csv_path).expect("Failed to load trip data");
    if loaded.skipped > 0 {
        warn!(skipped = loaded.skipped, "skipped rows with missing or malformed fields");
    }

    let store = TripStore::new(loaded.records);
    info!(
        trips = store.len(),
        stations = store.distinct_start_stations().len(),
        "trip store ready"
    );

    // Build app state
    let trips = CachedTripSource::new(store, &config.cache);
    let state = AppState::new(trips, config.recommender.clone());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listen address");
    info!(addr = %config.addr, "bike-share recommender listening");
    info!("  GET /health     - Health check");
    info!("  GET /stations   - Start stations");
    info!("  GET /recommend  - Recommend destinations");

    axum::serve(listener, app).await.expect("Server error");
}
