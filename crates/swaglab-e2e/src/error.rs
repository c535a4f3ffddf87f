//! Suite-level error taxonomy.
//!
//! Three families, kept distinct on purpose:
//!
//! - precondition violations (empty cart, missing named item, out-of-range
//!   index): contract errors raised immediately by page objects;
//! - assertion mismatches: the pass/fail signal of a test, surfaced as an
//!   `Err` the test unwraps;
//! - driver failures: anything the browser layer reports, passed through.
//!
//! Known-defect tolerance is NOT an error: see [`crate::outcome`].

use thiserror::Error;

/// Errors produced by the suite's page objects and fixtures.
#[derive(Debug, Error)]
pub enum SuiteError {
    /// The browser layer failed (navigation, script, wait timeout, ...).
    #[error(transparent)]
    Driver(#[from] swaglab_browser_test::DriverError),

    /// A line-item lookup ran against an empty cart.
    #[error("cart is empty, no line items to inspect")]
    EmptyCart,

    /// A line-item lookup by name matched nothing.
    #[error("no cart item named '{0}'")]
    ItemNotFound(String),

    /// A line-item lookup by index pointed past the cart contents.
    #[error("item index {index} out of range, cart holds {len}")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// How many items the cart holds
        len: usize,
    },

    /// The catalog has no product with the given name.
    #[error("no catalog product named '{0}'")]
    UnknownProduct(String),

    /// A rendered price was not in `$N.NN` form.
    #[error("price text '{0}' is not in $N.NN form")]
    MalformedPrice(String),

    /// Checkout information was missing a required field.
    #[error("checkout information is missing the {0} field")]
    IncompleteCheckoutInfo(&'static str),

    /// An observed value differed from the expectation.
    #[error("{what}: expected {expected}, found {found}")]
    Mismatch {
        /// What was being compared
        what: String,
        /// The expected rendering
        expected: String,
        /// The observed rendering
        found: String,
    },

    /// A fixture was asked for an impossible combination.
    #[error("unsupported fixture: {0}")]
    UnsupportedFixture(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    /// The image fetch utility hit an HTTP failure.
    #[error("image fetch failed for '{url}': {reason}")]
    ImageFetch {
        /// The URL that failed
        url: String,
        /// Why it failed
        reason: String,
    },

    /// Filesystem errors from snapshots and the image utility.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SuiteError {
    /// Builds a [`SuiteError::Mismatch`] from display-able ends.
    pub fn mismatch(
        what: impl Into<String>,
        expected: impl std::fmt::Display,
        found: impl std::fmt::Display,
    ) -> Self {
        Self::Mismatch {
            what: what.into(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

/// A specialized Result type for suite operations.
pub type Result<T> = std::result::Result<T, SuiteError>;
