//! Error types for browser automation operations.
//!
//! The taxonomy distinguishes launch/connection problems, navigation
//! failures, wait timeouts, script failures, and element location errors.
//! Wait timeouts double as the assertion-failure signal: an `expect_*`
//! combinator that never observes its condition surfaces here with the
//! condition description and the time budget that elapsed.

use std::time::Duration;
use thiserror::Error;

/// The main error type for all browser automation operations.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Failed to launch the browser process.
    ///
    /// Typically Chrome/Chromium is not installed or not executable.
    #[error("failed to launch browser: {reason}")]
    LaunchFailed {
        /// Human-readable reason for the launch failure
        reason: String,
        /// Optional underlying error that caused the failure
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to establish or keep the Chrome DevTools Protocol connection.
    #[error("CDP connection failed: {0}")]
    ConnectionFailed(String),

    /// Navigation to a URL failed or timed out.
    #[error("navigation to '{url}' failed: {reason}")]
    NavigationFailed {
        /// The URL that failed to load
        url: String,
        /// Reason for the navigation failure
        reason: String,
    },

    /// A wait condition was not satisfied within the timeout.
    ///
    /// This is the assertion-failure path for `expect_*` combinators.
    #[error("wait condition '{condition}' timed out after {timeout:?}")]
    WaitTimeout {
        /// Description of the condition that timed out
        condition: String,
        /// How long we waited before timing out
        timeout: Duration,
    },

    /// JavaScript execution in the page context failed.
    #[error("JavaScript execution failed: {0}")]
    ScriptFailed(String),

    /// A locator resolved to no matching element.
    #[error("no element matched '{selector}'")]
    ElementNotFound {
        /// The selector (plus any filter) that matched nothing
        selector: String,
    },

    /// A locator index pointed past the set of matched elements.
    #[error("index {index} out of bounds for '{selector}' ({count} matched)")]
    IndexOutOfBounds {
        /// The selector that was resolved
        selector: String,
        /// The requested index
        index: usize,
        /// How many elements actually matched
        count: usize,
    },

    /// An operation was attempted on a closed browser instance.
    #[error("browser instance is already closed")]
    AlreadyClosed,

    /// Wraps errors from the chromiumoxide library.
    #[error("chromiumoxide error: {0}")]
    ChromiumOxide(#[from] chromiumoxide::error::CdpError),

    /// Generic I/O errors (file access, network, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for browser operations.
pub type Result<T> = std::result::Result<T, DriverError>;
