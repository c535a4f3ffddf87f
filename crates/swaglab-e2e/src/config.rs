//! Suite configuration.
//!
//! Defaults point at the public demo deployment; every knob can be
//! overridden through `SWAGLAB_`-prefixed environment variables
//! (`SWAGLAB_BASE_URL`, `SWAGLAB_HEADLESS`, `SWAGLAB_IMAGE_DIR`, ...),
//! layered with figment the way the rest of our tooling loads settings.

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "SWAGLAB_";

/// Runtime configuration for the suite and its utilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the deployment under test.
    pub base_url: String,

    /// Run the browser headless.
    pub headless: bool,

    /// Wait-timeout budget for UI assertions, in seconds.
    pub wait_timeout_secs: u64,

    /// Where visual baselines are stored.
    pub snapshot_dir: PathBuf,

    /// Where the image fetch utility writes catalog images.
    pub image_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://www.saucedemo.com".to_string(),
            headless: true,
            wait_timeout_secs: 10,
            snapshot_dir: PathBuf::from("snapshots"),
            image_dir: PathBuf::from("product-images"),
        }
    }
}

impl Config {
    /// Loads configuration: defaults merged under environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error when an override fails to parse (e.g.
    /// `SWAGLAB_HEADLESS=maybe`).
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
    }

    /// The wait budget as a [`Duration`].
    #[must_use]
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }
}
