//! Browser lifecycle management and process control.
//!
//! This module provides `TestBrowser`, the entry point for browser-driven
//! tests. It launches Chrome, keeps the CDP event loop running, and creates
//! pages.
//!
//! # Resource Safety
//!
//! Every test owns its browser exclusively for the test's lifetime. Explicit
//! `close()` is the graceful path; if a test panics before reaching it, the
//! Drop chain kills the Chrome process so nothing leaks.

use crate::error::{DriverError, Result};
use crate::page::Page;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Configuration for launching a test browser.
///
/// Defaults to headless Chrome at the viewport the suite's assertions were
/// written against. Build with the `visible` feature (or call
/// [`LaunchOptions::headful`]) to watch a run.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Run in headless mode (default: true).
    pub headless: bool,

    /// Browser window size (default: 1280x720).
    pub window_size: (u32, u32),

    /// Additional Chrome arguments.
    pub args: Vec<String>,

    /// Chrome executable path (None = auto-detect).
    pub chrome_path: Option<String>,
}

impl LaunchOptions {
    /// Creates options with the headless defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables visible mode for debugging.
    #[must_use]
    pub fn headful(mut self) -> Self {
        self.headless = false;
        self
    }

    /// Sets a custom window size.
    #[must_use]
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Adds additional Chrome arguments.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args.extend(args);
        self
    }

    /// Overrides the Chrome executable path.
    #[must_use]
    pub fn with_chrome_path(mut self, path: impl Into<String>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Converts to a chromiumoxide `BrowserConfig`.
    #[allow(clippy::result_large_err)]
    fn to_browser_config(&self) -> Result<BrowserConfig> {
        let mut config = BrowserConfig::builder();

        if self.headless {
            config = config.arg("--headless");
        }

        config = config.arg(format!(
            "--window-size={},{}",
            self.window_size.0, self.window_size.1
        ));

        // Unique user data directory so parallel instances don't trip over
        // Chrome's ProcessSingleton lock.
        let temp_dir = std::env::temp_dir();
        let unique_id = uuid::Uuid::new_v4();
        let user_data_dir = temp_dir.join(format!("swaglab-browser-{unique_id}"));
        config = config.arg(format!("--user-data-dir={}", user_data_dir.display()));

        for arg in &self.args {
            config = config.arg(arg.clone());
        }

        if let Some(path) = &self.chrome_path {
            config = config.chrome_executable(path.clone());
        }

        config.build().map_err(|e| DriverError::LaunchFailed {
            reason: format!("invalid browser configuration: {e}"),
            source: None,
        })
    }
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: !cfg!(feature = "visible"),
            window_size: (1280, 720),
            args: vec![
                // Required in containerized CI where user namespaces are
                // unavailable; never hand untrusted content to this profile.
                "--no-sandbox".to_string(),
                // Prevents /dev/shm exhaustion in containers
                "--disable-dev-shm-usage".to_string(),
            ],
            chrome_path: None,
        }
    }
}

/// A managed browser instance for testing.
///
/// # Example
///
/// ```ignore
/// let browser = TestBrowser::launch(LaunchOptions::default()).await?;
/// let page = browser.new_page().await?;
/// page.goto("https://www.saucedemo.com/").await?;
/// // drive the page...
/// browser.close().await?;
/// ```
///
/// # Resource Management
///
/// Prefer explicit `close()` at the end of a test: Drop is synchronous and
/// can only kill the process, not shut it down gracefully.
pub struct TestBrowser {
    inner: Arc<Mutex<Option<Browser>>>,
}

impl TestBrowser {
    /// Launches a new browser instance with the given options.
    ///
    /// Spawns a Chrome process, establishes the CDP connection, and starts
    /// the handler task that drives protocol events.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::LaunchFailed`] if Chrome is not installed, not
    /// executable, or fails to start.
    pub async fn launch(options: LaunchOptions) -> Result<Self> {
        debug!("launching browser with {:?}", options);

        let browser_config = options.to_browser_config()?;

        let (browser, mut handler) =
            Browser::launch(browser_config)
                .await
                .map_err(|e| DriverError::LaunchFailed {
                    reason: "failed to launch Chrome process".to_string(),
                    source: Some(Box::new(e)),
                })?;

        // The handler stream must be polled for chromiumoxide to process
        // CDP traffic at all.
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!("browser handler error: {}", e);
                }
            }
        });

        debug!("browser launched");

        Ok(Self {
            inner: Arc::new(Mutex::new(Some(browser))),
        })
    }

    /// Creates a new browser page (tab).
    ///
    /// Each page has independent DOM state and its own dialog watcher.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::AlreadyClosed`] if the browser has been closed.
    pub async fn new_page(&self) -> Result<Page> {
        let browser = self.inner.lock().await;

        let browser = browser.as_ref().ok_or(DriverError::AlreadyClosed)?;

        let chrome_page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| DriverError::ConnectionFailed(e.to_string()))?;

        Ok(Page::new(chrome_page))
    }

    /// Closes the browser and kills the Chrome process.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser fails to close gracefully.
    pub async fn close(self) -> Result<()> {
        let mut browser_guard = self.inner.lock().await;

        if let Some(mut browser) = browser_guard.take() {
            debug!("closing browser gracefully");
            browser
                .close()
                .await
                .map_err(|e| DriverError::ConnectionFailed(e.to_string()))?;
        }

        Ok(())
    }

    /// Returns true if the browser has been closed.
    pub async fn is_closed(&self) -> bool {
        self.inner.lock().await.is_none()
    }
}

impl Drop for TestBrowser {
    fn drop(&mut self) {
        // No async in Drop; chromiumoxide's Browser::drop kills the Chrome
        // process when the inner Option is still occupied, so a panicking
        // test cannot leak a browser.
        warn!("TestBrowser dropped without explicit close() - forcing shutdown via Drop");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_headless_at_suite_viewport() {
        let options = LaunchOptions::default();
        assert!(options.headless || cfg!(feature = "visible"));
        assert_eq!(options.window_size, (1280, 720));
        assert!(options.args.iter().any(|a| a == "--no-sandbox"));
    }

    #[test]
    fn builder_style_options_compose() {
        let options = LaunchOptions::new()
            .headful()
            .with_window_size(800, 600)
            .with_args(vec!["--lang=en-US".to_string()]);

        assert!(!options.headless);
        assert_eq!(options.window_size, (800, 600));
        assert!(options.args.iter().any(|a| a == "--lang=en-US"));
    }

    #[tokio::test]
    #[ignore] // Requires Chrome to be installed
    async fn browser_launch_and_close() {
        let browser = TestBrowser::launch(LaunchOptions::default())
            .await
            .expect("failed to launch browser");

        assert!(!browser.is_closed().await);

        browser.close().await.expect("failed to close browser");
    }
}
