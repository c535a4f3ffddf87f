//! # swaglab-browser-test
//!
//! A browser automation layer built on chromiumoxide, shaped for
//! page-object-model UI suites.
//!
//! This crate provides primitives for launching headless Chrome, navigating
//! pages, locating elements, driving input, and waiting for UI conditions.
//! It knows nothing about any particular application; the suite crates build
//! page objects on top of it.
//!
//! ## Architecture
//!
//! - **TestBrowser**: manages the browser process lifecycle
//! - **Page**: a browser tab with navigation, scripting and screenshots
//! - **Locator**: a lazy element handle, re-queried on every access
//! - **DialogWatcher**: auto-accepts and records JavaScript dialogs
//! - **TargetApp**: trait describing the deployment under test
//! - **WaitConfig**: polling assertions with timeouts
//!
//! ## Design Principles
//!
//! 1. **Application-agnostic**: no assumptions about the app under test
//! 2. **Lazy location**: a `Locator` never caches a DOM node; every query
//!    and action re-resolves, so results always reflect the current DOM
//! 3. **Resource-safe**: explicit close with Drop as backstop, no leaked
//!    Chrome processes even when a test panics
//! 4. **Async-first**: built on tokio
//!
//! ## Example Usage
//!
//! ```ignore
//! use swaglab_browser_test::{LaunchOptions, TestBrowser, WaitConfig};
//!
//! #[tokio::test]
//! async fn test_heading_renders() -> Result<(), Box<dyn std::error::Error>> {
//!     let browser = TestBrowser::launch(LaunchOptions::default()).await?;
//!     let page = browser.new_page().await?;
//!
//!     page.goto("http://localhost:3000").await?;
//!     page.locator("h1").expect_text("Storefront", WaitConfig::default()).await?;
//!
//!     browser.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Testing Strategy
//!
//! Unit tests cover the pure logic (wait loops, selector escaping, URL
//! joining). Integration tests in `tests/integration.rs` require Chrome and
//! are `#[ignore]`-gated; run them with `cargo test -- --ignored`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod browser;
pub mod dialog;
pub mod error;
pub mod locator;
pub mod page;
pub mod target;
pub mod wait;

// Re-export main types for convenience
pub use browser::{LaunchOptions, TestBrowser};
pub use dialog::{DialogEvent, DialogWatcher};
pub use error::{DriverError, Result};
pub use locator::Locator;
pub use page::Page;
pub use target::{StaticTarget, TargetApp};
pub use wait::{WaitConfig, DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT};
