//! Page-level browser operations and navigation.
//!
//! The `Page` type wraps a chromiumoxide tab and adds typed script
//! evaluation, load waiting, URL assertions, dialog interception, and the
//! [`Locator`] factory the page objects are built from.

use crate::dialog::DialogWatcher;
use crate::error::{DriverError, Result};
use crate::locator::Locator;
use crate::target::TargetApp;
use crate::wait::{wait_until, WaitConfig};
use chromiumoxide::page::Page as ChromePage;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::warn;

/// Represents a browser page (tab) with testing capabilities.
///
/// Wraps `chromiumoxide::page::Page` and adds:
/// - typed navigation with load waiting
/// - `Locator` construction
/// - JavaScript dialog auto-accept and capture
/// - URL polling assertions
#[derive(Debug)]
pub struct Page {
    inner: Arc<ChromePage>,
    dialogs: DialogWatcher,
    _dialog_task: JoinHandle<()>,
}

impl Page {
    /// Creates a new Page wrapper and starts the dialog watcher.
    ///
    /// Called internally by `TestBrowser`; users don't construct Pages
    /// directly.
    pub(crate) fn new(page: ChromePage) -> Self {
        let page_arc = Arc::new(page);
        let (dialogs, dialog_task) = DialogWatcher::attach(page_arc.clone());

        Self {
            inner: page_arc,
            dialogs,
            _dialog_task: dialog_task,
        }
    }

    /// Returns a handle to the captured JavaScript dialogs.
    ///
    /// Dialogs are auto-accepted as they open; this accessor exposes what
    /// the application raised.
    #[must_use]
    pub fn dialogs(&self) -> &DialogWatcher {
        &self.dialogs
    }

    /// Builds a lazy locator for a CSS selector.
    ///
    /// Nothing is queried until the locator is used, and every use
    /// re-queries, so the handle always reflects the current DOM.
    #[must_use]
    pub fn locator(&self, selector: impl Into<String>) -> Locator {
        Locator::new(self.inner.clone(), selector)
    }

    /// Navigates to an absolute URL and waits for the initial load.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::NavigationFailed`] if the page fails to load
    /// or times out.
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.inner
            .goto(url)
            .await
            .map_err(|e| DriverError::NavigationFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        self.wait_for_load(WaitConfig::default()).await?;
        Ok(())
    }

    /// Navigates to a path on the target application.
    ///
    /// The preferred way to navigate in tests: joins the path with the
    /// target's base URL and performs its health check first to fail fast.
    ///
    /// # Errors
    ///
    /// Returns an error if the health check or navigation fails.
    pub async fn goto_on(&self, target: &dyn TargetApp, path: &str) -> Result<()> {
        target.health_check().await?;

        let url = target.url(path);
        self.goto(&url).await
    }

    /// Waits until `document.readyState` is `complete`.
    ///
    /// Called by `goto()`; call it manually after triggering navigation
    /// through the page itself (form submits, link clicks).
    ///
    /// # Errors
    ///
    /// Returns an error if the wait times out.
    pub async fn wait_for_load(&self, config: WaitConfig) -> Result<()> {
        wait_until(
            || {
                let page = self.inner.clone();
                async move {
                    let result = page
                        .evaluate("document.readyState")
                        .await
                        .map_err(|e| DriverError::ScriptFailed(e.to_string()))?;

                    let ready = result
                        .value()
                        .and_then(|v| v.as_str())
                        .is_some_and(|s| s == "complete");

                    Ok(ready)
                }
            },
            config,
            "document ready",
        )
        .await
    }

    /// Executes JavaScript in the page context and returns the result.
    ///
    /// # Security
    ///
    /// Do not interpolate unsanitized input into the script. Dynamic
    /// operands must be JSON-encoded first (see `Locator` for the pattern).
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails or the result cannot be
    /// deserialized into `T`.
    pub async fn evaluate<T>(&self, script: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let result = self
            .inner
            .evaluate(script)
            .await
            .map_err(|e| DriverError::ScriptFailed(e.to_string()))?;

        result
            .into_value()
            .map_err(|e| DriverError::ScriptFailed(e.to_string()))
    }

    /// Returns the current page URL.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn url(&self) -> Result<String> {
        self.evaluate("window.location.href").await
    }

    /// Polls until the current URL contains `fragment`.
    ///
    /// Route recognition in the suite is by URL fragment, so this is the
    /// "did navigation land where expected" assertion.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::WaitTimeout`] if the URL never matches.
    pub async fn expect_url_contains(&self, fragment: &str, config: WaitConfig) -> Result<()> {
        wait_until(
            || async { Ok(self.url().await?.contains(fragment)) },
            config,
            &format!("url contains '{fragment}'"),
        )
        .await
    }

    /// Takes a screenshot of the page and returns PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if screenshot capture fails.
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        self.inner
            .screenshot(chromiumoxide::page::ScreenshotParams::default())
            .await
            .map_err(|e| DriverError::ScriptFailed(e.to_string()))
    }

    /// Closes the page.
    ///
    /// Called automatically when the browser closes; explicit close is for
    /// tests that cycle tabs within one browser.
    ///
    /// # Behavior on outstanding references
    ///
    /// The inner tab is shared (Arc) with the dialog watcher task and any
    /// live locators. If other references still exist the page is left for
    /// the browser teardown to collect, which is fine for a test library.
    ///
    /// # Errors
    ///
    /// Returns an error if closing the page fails.
    pub async fn close(self) -> Result<()> {
        match Arc::try_unwrap(self.inner) {
            Ok(page) => {
                page.close().await.map_err(DriverError::ChromiumOxide)?;
                Ok(())
            }
            Err(_arc) => {
                warn!("Page::close() called with outstanding references - relying on Drop");
                Ok(())
            }
        }
    }
}
