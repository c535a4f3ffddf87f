//! The deployment under test.
//!
//! This crate doesn't know how the application is hosted; it only needs a
//! base URL to join paths onto and an optional health probe to fail fast
//! before navigating. Suites implement [`TargetApp`] however their app is
//! deployed, or use [`StaticTarget`] for one that is already running.

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

/// Describes a running deployment of the application under test.
///
/// Object-safe so pages can take `&dyn TargetApp`.
#[async_trait]
pub trait TargetApp: Send + Sync {
    /// Base URL of the deployment (e.g. `https://www.saucedemo.com`),
    /// without a trailing slash.
    fn base_url(&self) -> &str;

    /// Probes the deployment before navigation to fail fast if it is down.
    ///
    /// The default implementation assumes healthy.
    ///
    /// # Errors
    ///
    /// Implementations return an error when the deployment is unreachable.
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    /// Joins a path onto the base URL.
    ///
    /// ```ignore
    /// target.url("/inventory.html") // "https://www.saucedemo.com/inventory.html"
    /// ```
    fn url(&self, path: &str) -> String {
        let base = self.base_url().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl fmt::Debug for dyn TargetApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetApp")
            .field("base_url", &self.base_url())
            .finish()
    }
}

/// A target that is simply an externally running URL.
///
/// Suitable for public demo deployments that the suite doesn't manage.
#[derive(Debug, Clone)]
pub struct StaticTarget {
    base_url: String,
}

impl StaticTarget {
    /// Creates a target from a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TargetApp for StaticTarget {
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_target_url_joining() {
        let target = StaticTarget::new("https://www.saucedemo.com");
        assert_eq!(
            target.url("/inventory.html"),
            "https://www.saucedemo.com/inventory.html"
        );
        assert_eq!(
            target.url("inventory.html"),
            "https://www.saucedemo.com/inventory.html"
        );

        let with_slash = StaticTarget::new("https://www.saucedemo.com/");
        assert_eq!(
            with_slash.url("/cart.html"),
            "https://www.saucedemo.com/cart.html"
        );
    }
}
