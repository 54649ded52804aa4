use std::net::SocketAddr;
use std::time::Duration;

use metro_server::cache::{CacheConfig, CachedRouter};
use metro_server::dataset::{DatasetClient, DatasetClientConfig, MetroNetwork, load_file};
use metro_server::web::{AppState, create_router};

/// How often to reload the station dataset (24 hours).
const DATASET_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("metro_server=info")),
        )
        .init();

    // Create the dataset client, honouring a feed URL override
    let mut client_config = DatasetClientConfig::new();
    if let Ok(url) = std::env::var("METRO_DATA_URL") {
        client_config = client_config.with_url(url);
    }
    let client = DatasetClient::new(client_config).expect("Failed to create dataset client");

    // Load the station dataset (fail fast if unavailable). A local file,
    // when given, takes precedence over the feed.
    let local_file = std::env::var("METRO_DATA_FILE").ok();
    let network = match &local_file {
        Some(path) => {
            println!("Loading stations from {path}...");
            let stations = load_file(path).expect("Failed to load station file");
            MetroNetwork::from_stations(client, stations)
                .expect("Failed to build station graph")
        }
        None => {
            println!("Fetching stations...");
            MetroNetwork::fetch(client)
                .await
                .expect("Failed to fetch station dataset")
        }
    };
    println!("Loaded {} stations", network.len().await);

    // Build the cached route finder
    let router = CachedRouter::new(network, &CacheConfig::default());
    let state = AppState::new(router);

    // Spawn background task to reload the dataset daily (feed mode only)
    if local_file.is_none() {
        let refresh_state = state.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(DATASET_REFRESH_INTERVAL);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match refresh_state.router.refresh().await {
                    Ok(count) => println!("Refreshed station dataset: {} stations", count),
                    Err(e) => eprintln!("Failed to refresh station dataset: {}", e),
                }
            }
        });
    }

    // Create router
    let app = create_router(state, "static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Metro Route Finder listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health        - Health check");
    println!("  GET  /api/stations  - List stations");
    println!("  GET  /api/route     - Find a route (?from=&to=)");
    println!("  POST /api/refresh   - Reload the dataset");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
