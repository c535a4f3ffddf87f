//! The fixed set of test accounts.
//!
//! The demo deployment provisions a handful of accounts that share one
//! password but differ in server-side behavior; the suite encodes them as an
//! enum so a test declares its account the same way it declares its cart
//! seed.

/// A provisioned test account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum User {
    /// Fully working account; the baseline for every positive flow.
    Standard,
    /// Cannot log in at all; the login form surfaces an error.
    LockedOut,
    /// Logs in, but renders broken images and drops some cart interactions.
    Problem,
    /// Logs in, but several cart controls silently fail.
    Error,
    /// Logs in with intentional visual glitches; used by snapshot tests.
    Visual,
}

impl User {
    /// The username the login form expects.
    #[must_use]
    pub fn username(&self) -> &'static str {
        match self {
            User::Standard => "standard_user",
            User::LockedOut => "locked_out_user",
            User::Problem => "problem_user",
            User::Error => "error_user",
            User::Visual => "visual_user",
        }
    }

    /// All accounts share one password on the demo deployment.
    #[must_use]
    pub fn password(&self) -> &'static str {
        "secret_sauce"
    }

    /// True for the accounts whose cart interactions are known-broken and
    /// must go through the tolerant entry points.
    #[must_use]
    pub fn has_cart_defects(&self) -> bool {
        matches!(self, User::Problem | User::Error)
    }
}

/// Whether add-to-cart is expected to work for `product_name` under the
/// known-defect accounts ([`User::Problem`], [`User::Error`]).
///
/// Half the catalog accepts the click, half silently ignores it; the
/// negative tests assert both sides.
#[must_use]
pub fn add_works_under_defects(product_name: &str) -> bool {
    matches!(
        product_name,
        "Sauce Labs Backpack" | "Sauce Labs Bike Light" | "Sauce Labs Onesie"
    )
}
