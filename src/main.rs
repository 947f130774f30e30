//! Placard host binary.
//!
//! Serves the generate-image function locally, the way the gateway invokes
//! it in production.

use placard::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting placard function host...");

    let config = HostConfig::new().host("0.0.0.0").port(8080);
    let host = FunctionHost::new(config, GenerateImageFunction);

    tracing::info!("Hosting function: generate-image");
    tracing::info!(
        "Try: curl -X POST -H 'Content-Type: application/json' \
         -d '{{\"text\":\"Patience is a virtue\"}}' http://localhost:8080/"
    );
    tracing::info!("Health check: curl http://localhost:8080/_health");

    host.run().await
}
