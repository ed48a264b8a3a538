//! Extension server entry point.
//!
//! ```bash
//! RUST_LOG=info cargo run -p cart-extension
//! LOOKUP_BACKEND=memory CATALOG_SEED=demos/catalog.json cargo run -p cart-extension
//! ```

use anyhow::Context;
use cart_extension::config::{ExtensionConfig, LookupBackend};
use cart_extension::lifecycle::{CatalogSeed, CatalogSystem};
use cart_extension::lookup::{PlatformLookup, ResourceLookup};
use cart_extension::service::{router, AppState};
use catalog_framework::tracing::setup_tracing;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = ExtensionConfig::load().context("loading configuration")?;
    info!(port = config.port, "Starting cart extension");

    let mut catalog = None;
    let lookup: Arc<dyn ResourceLookup> = match config.backend {
        LookupBackend::Memory { seed } => {
            let system = CatalogSystem::new();
            match seed {
                Some(path) => {
                    let seed = CatalogSeed::from_file(&path)?;
                    system.seed(&seed).await?;
                }
                None => warn!("No CATALOG_SEED set; starting with an empty catalog"),
            }
            let lookup = Arc::new(system.lookup());
            catalog = Some(system);
            lookup
        }
        LookupBackend::Platform(platform) => {
            info!(project_key = %platform.project_key, "Using platform lookup");
            Arc::new(PlatformLookup::new(platform)?)
        }
    };

    let app = router(AppState::new(lookup));
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(system) = catalog {
        system.shutdown().await?;
    }

    info!("Cart extension stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Cannot listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
