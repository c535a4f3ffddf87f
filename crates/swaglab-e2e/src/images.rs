//! Catalog image fetching, behind the `fetch-images` binary.
//!
//! Downloads each catalog product's image from the deployment and writes it
//! under the configured directory with a normalized filename.

use crate::catalog::CATALOG;
use crate::config::Config;
use crate::error::{Result, SuiteError};
use std::path::PathBuf;
use tracing::info;

/// Normalizes a product name to a stable filename: lowercase, spaces to
/// underscores, parentheses and dots dropped, `.jpg` appended.
#[must_use]
pub fn normalized_image_name(product_name: &str) -> String {
    let mut cleaned = String::with_capacity(product_name.len() + 4);
    for ch in product_name.to_lowercase().chars() {
        match ch {
            ' ' => cleaned.push('_'),
            '(' | ')' | '.' => {}
            other => cleaned.push(other),
        }
    }
    cleaned.push_str(".jpg");
    cleaned
}

/// Downloads every catalog image into `config.image_dir`, returning the
/// written paths in catalog order.
///
/// # Errors
///
/// Fails on the first HTTP or filesystem problem; already-written files are
/// left in place.
pub async fn download_catalog_images(config: &Config) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&config.image_dir)?;

    let client = reqwest::Client::new();
    let base = config.base_url.trim_end_matches('/');

    let mut written = Vec::with_capacity(CATALOG.len());
    for product in CATALOG.iter() {
        let url = format!("{base}{}", product.image_path);
        let save_path = config.image_dir.join(normalized_image_name(product.name));

        let response = client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| SuiteError::ImageFetch {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let bytes = response.bytes().await.map_err(|e| SuiteError::ImageFetch {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        std::fs::write(&save_path, &bytes)?;
        info!("saved {}", save_path.display());
        written.push(save_path);
    }

    Ok(written)
}
