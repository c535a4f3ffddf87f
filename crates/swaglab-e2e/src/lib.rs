//! # swaglab-e2e
//!
//! Page-object-model UI test suite for a Swag-Labs-style storefront demo:
//! login, inventory browsing, cart manipulation, checkout, and product
//! filtering, driven through [`swaglab_browser_test`].
//!
//! The crate splits into:
//!
//! - **catalog**: the immutable six-product reference catalog, the sort
//!   modes the inventory page offers, and the pure sort function tests
//!   compare rendered order against
//! - **users**: the fixed set of test accounts and their behavioral quirks
//! - **pages**: one page object per application screen (login, inventory,
//!   cart, checkout information, order overview)
//! - **session**: fixture composition — a builder that produces a logged-in
//!   browser session in a declared cart state
//! - **outcome**: typed results for interactions that are expected to break
//!   under the known-defect accounts
//! - **visual**: baseline screenshot snapshots
//! - **images**: the catalog image fetch utility behind `fetch-images`
//!
//! Browser-driven tests live in `tests/` and are `#[ignore]`-gated; they
//! need Chrome and network access to the deployed demo. Pure logic is unit
//! tested in-module and runs everywhere.

pub mod catalog;
pub mod config;
pub mod error;
pub mod images;
pub mod logging;
pub mod outcome;
pub mod pages;
pub mod session;
pub mod users;
pub mod visual;

pub use catalog::{sort_products, Product, SortOrder, CATALOG};
pub use config::Config;
pub use error::{Result, SuiteError};
pub use outcome::CartOutcome;
pub use session::{CartSeed, Session, SessionBuilder};
pub use users::User;
