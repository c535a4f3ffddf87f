//! Fetches every catalog product image from the deployment.
//!
//! Configuration comes from the environment: `SWAGLAB_BASE_URL` selects the
//! deployment, `SWAGLAB_IMAGE_DIR` the output directory.
//!
//! ```text
//! SWAGLAB_IMAGE_DIR=./assets cargo run --bin fetch-images
//! ```

use swaglab_e2e::config::Config;
use swaglab_e2e::images::download_catalog_images;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        "fetching catalog images from {} into {}",
        config.base_url,
        config.image_dir.display()
    );

    match download_catalog_images(&config).await {
        Ok(written) => {
            info!("saved {} images", written.len());
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!("image fetch failed: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
