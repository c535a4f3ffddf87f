//! Page objects: one module per application screen.
//!
//! Each page object binds the screen's selector table to semantic actions
//! and composite assertions, built on [`swaglab_browser_test::Locator`]'s
//! lazy accessors. Shared regions (the primary header with the cart badge,
//! the cart line-item list) live in their own views so the cart and order
//! screens don't duplicate them.

pub mod cart;
pub mod checkout;
pub mod header;
pub mod inventory;
pub mod line_items;
pub mod login;
pub mod order;

pub use cart::CartPage;
pub use checkout::{CheckoutInfo, CheckoutPage};
pub use header::PrimaryHeader;
pub use inventory::InventoryPage;
pub use line_items::{ItemQuery, LineItem, LineItems};
pub use login::LoginPage;
pub use order::OrderPage;

/// URL fragments that identify the post-login routes.
///
/// Route recognition is by fragment match on the current URL, mirroring how
/// the app names its pages.
pub mod routes {
    /// The inventory (product listing) page.
    pub const INVENTORY: &str = "inventory.html";
    /// The cart page.
    pub const CART: &str = "cart.html";
    /// Checkout step one: customer information form.
    pub const CHECKOUT_INFORMATION: &str = "checkout-step-one.html";
    /// Checkout step two: order overview with totals.
    pub const CHECKOUT_OVERVIEW: &str = "checkout-step-two.html";
}
