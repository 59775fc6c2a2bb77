use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use budget_api::api;
use budget_api::config::Settings;
use budget_api::store::PriceStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_application()?;

    info!("🌐 Starting Personal Budget API server");

    let settings = Settings::new()?;
    info!("📋 Configuration loaded successfully");

    // Seed the price board and share it behind one lock
    let store = Arc::new(Mutex::new(PriceStore::seeded()));

    // Create API router with permissive CORS
    let app = api::create_router(store).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // Start server
    let addr = settings.listen_addr();
    info!("🚀 Starting HTTP API server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    info!("✅ HTTP API server listening on http://{}", addr);
    info!("📡 Available endpoints:");
    info!("   GET    /prices - List all food prices");
    info!("   POST   /prices - Add a new price");
    info!("   PATCH  /prices/:name - Update the price of an item");
    info!("   PUT    /prices/:name - Replace an item");
    info!("   DELETE /prices/:name - Delete an item");
    info!("   GET    /docs - OpenAPI description");

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}

fn init_application() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    if dotenv::dotenv().is_err() {
        warn!("⚠️  No .env file found, using environment variables");
    }

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("budget_api=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    info!("🔧 Application environment initialized");
    Ok(())
}
