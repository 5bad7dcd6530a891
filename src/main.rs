#![recursion_limit = "256"]

mod catalog;
mod config;
mod routes;
mod state;

use std::process::ExitCode;

use crate::catalog::{CatalogLoadError, ProductCatalog};
use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),
    #[error("{0}")]
    Router(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "hfurniture failed to start");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    let catalog = ProductCatalog::load(config.catalog_path.as_deref())?;
    match &config.catalog_path {
        Some(path) => tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded"),
        None => tracing::info!(products = catalog.len(), "using built-in catalog fixture"),
    }
    if catalog.is_empty() {
        tracing::warn!("catalog has no products");
    }

    let state = state::AppState::new(catalog);
    let app = routes::app(state, config.site_root).map_err(StartupError::Router)?;

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "hfurniture listening");
    axum::serve(listener, app).await?;
    Ok(())
}
