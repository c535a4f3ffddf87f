//! Fixture composition: a ready browser session in a declared state.
//!
//! A test declares its preconditions on two independent axes — which account
//! logs in, and what the cart holds after setup — and gets back a live
//! session plus the list of products the seed added. The axes are enums, so
//! an unknown fixture name is a compile error, not a runtime lookup failure.
//!
//! Every session exclusively owns one browser process for one test.
//! `close()` is the graceful teardown; if a test panics first, the browser
//! layer's Drop chain kills the process.

use crate::catalog::{Product, CATALOG};
use crate::config::Config;
use crate::error::{Result, SuiteError};
use crate::pages::{
    CartPage, CheckoutInfo, CheckoutPage, InventoryPage, LoginPage, OrderPage,
};
use crate::users::{add_works_under_defects, User};
use rand::seq::IndexedRandom;
use swaglab_browser_test::{LaunchOptions, Page, StaticTarget, TestBrowser, WaitConfig};
use tracing::{debug, info};

/// What the cart holds after setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartSeed {
    /// Nothing added; the returned product list is empty.
    Empty,
    /// Every catalog product, added in catalog order.
    All,
    /// A random sample of `n` distinct products. The returned list's order
    /// is unspecified and differs across runs.
    Sample(usize),
    /// Only the products whose add control works under the known-defect
    /// accounts, added tolerantly.
    DefectTolerant,
}

/// Builder for a logged-in session in a declared cart state.
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    user: User,
    cart: CartSeed,
    config: Option<Config>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            user: User::Standard,
            cart: CartSeed::Empty,
            config: None,
        }
    }
}

impl SessionBuilder {
    /// Selects the account to log in with.
    #[must_use]
    pub fn user(mut self, user: User) -> Self {
        self.user = user;
        self
    }

    /// Selects the cart contents to set up.
    #[must_use]
    pub fn cart(mut self, cart: CartSeed) -> Self {
        self.cart = cart;
        self
    }

    /// Overrides the environment-loaded configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Launches the browser, logs in, seeds the cart, and returns the
    /// session together with the list of products the seed added.
    ///
    /// # Errors
    ///
    /// - [`SuiteError::UnsupportedFixture`] for [`User::LockedOut`], which
    ///   can never reach the inventory page;
    /// - login, navigation, and seeding failures otherwise.
    pub async fn build(self) -> Result<(Session, Vec<Product>)> {
        if self.user == User::LockedOut {
            return Err(SuiteError::UnsupportedFixture(
                "locked_out_user cannot produce a logged-in session".to_string(),
            ));
        }

        let config = match self.config {
            Some(config) => config,
            None => Config::load()?,
        };

        let session = Session::open(config).await?;

        session
            .login_page()
            .open_and_login(&session.target, self.user)
            .await?;

        let added = seed_cart(&session, self.user, self.cart).await?;

        session.inventory().header().expect_badge(added.len()).await?;

        Ok((session, added))
    }
}

/// Populates the cart per the seed and returns what was added.
async fn seed_cart(session: &Session, user: User, seed: CartSeed) -> Result<Vec<Product>> {
    let inventory = session.inventory();

    match seed {
        CartSeed::Empty => Ok(Vec::new()),
        CartSeed::All => {
            inventory.wait_until_ready().await?;
            for product in CATALOG.iter() {
                inventory.add_to_cart(product).await?;
            }
            Ok(CATALOG.clone())
        }
        CartSeed::Sample(n) => {
            inventory.wait_until_ready().await?;
            let n = n.min(CATALOG.len());
            let picked: Vec<Product> = CATALOG
                .as_slice()
                .choose_multiple(&mut rand::rng(), n)
                .cloned()
                .collect();
            for product in &picked {
                inventory.add_to_cart(product).await?;
            }
            debug!("sampled cart seed: {:?}", picked.iter().map(|p| p.name).collect::<Vec<_>>());
            Ok(picked)
        }
        CartSeed::DefectTolerant => {
            inventory.wait_until_ready().await?;
            let mut added = Vec::new();
            for product in CATALOG.iter().filter(|p| add_works_under_defects(p.name)) {
                let outcome = inventory.try_add_to_cart(product).await?;
                if outcome.applied() {
                    added.push(product.clone());
                } else {
                    // The allowed-cart table says this add works; record the
                    // surprise but keep the fixture usable.
                    info!(
                        "expected-addable '{}' was ignored under {}",
                        product.name,
                        user.username()
                    );
                }
            }
            Ok(added)
        }
    }
}

/// An exclusively owned browser session against the target deployment.
pub struct Session {
    browser: TestBrowser,
    page: Page,
    target: StaticTarget,
    waits: WaitConfig,
}

impl Session {
    /// Starts building a logged-in session.
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// Launches a browser against the configured deployment without logging
    /// in; the page sits on the login screen.
    ///
    /// The entry point for tests that exercise the login form itself.
    ///
    /// # Errors
    ///
    /// Fails if the browser can't launch or the page can't open.
    pub async fn open(config: Config) -> Result<Self> {
        let mut options = LaunchOptions::default();
        if !config.headless {
            options = options.headful();
        }

        let browser = TestBrowser::launch(options).await.map_err(SuiteError::from)?;
        let page = browser.new_page().await.map_err(SuiteError::from)?;

        let target = StaticTarget::new(config.base_url.clone());
        let waits = WaitConfig::with_timeout(config.wait_timeout());

        let session = Self {
            browser,
            page,
            target,
            waits,
        };

        session.login_page().open(&session.target).await?;
        Ok(session)
    }

    /// The live page.
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The deployment under test.
    #[must_use]
    pub fn target(&self) -> &StaticTarget {
        &self.target
    }

    /// The wait budget page objects created by this session use.
    #[must_use]
    pub fn waits(&self) -> WaitConfig {
        self.waits
    }

    // -- page objects --

    /// The login page object.
    #[must_use]
    pub fn login_page(&self) -> LoginPage<'_> {
        LoginPage::new(&self.page, self.waits)
    }

    /// The inventory page object.
    #[must_use]
    pub fn inventory(&self) -> InventoryPage<'_> {
        InventoryPage::new(&self.page, self.waits)
    }

    /// The cart page object.
    #[must_use]
    pub fn cart(&self) -> CartPage<'_> {
        CartPage::new(&self.page, self.waits)
    }

    /// The checkout information page object.
    #[must_use]
    pub fn checkout(&self) -> CheckoutPage<'_> {
        CheckoutPage::new(&self.page, self.waits)
    }

    /// The order overview page object.
    #[must_use]
    pub fn order(&self) -> OrderPage<'_> {
        OrderPage::new(&self.page, self.waits)
    }

    // -- navigation fixtures --

    /// Navigates to the cart and returns its page object.
    ///
    /// # Errors
    ///
    /// Fails if navigation fails.
    pub async fn goto_cart(&self) -> Result<CartPage<'_>> {
        self.inventory().header().open_cart().await?;
        let cart = self.cart();
        cart.expect_on_cart().await?;
        Ok(cart)
    }

    /// Navigates through the cart to the checkout information form.
    ///
    /// # Errors
    ///
    /// Fails if navigation fails.
    pub async fn goto_checkout(&self) -> Result<CheckoutPage<'_>> {
        let cart = self.goto_cart().await?;
        cart.checkout().await?;
        let checkout = self.checkout();
        checkout.wait_until_ready().await?;
        Ok(checkout)
    }

    /// Navigates through the cart and the information form to the order
    /// overview.
    ///
    /// # Errors
    ///
    /// Fails if navigation or the form submission fails.
    pub async fn goto_order(&self, info: &CheckoutInfo) -> Result<OrderPage<'_>> {
        let checkout = self.goto_checkout().await?;
        checkout.fill_and_continue(info).await?;
        let order = self.order();
        order.wait_until_ready().await?;
        Ok(order)
    }

    /// Tears down the page and the browser process.
    ///
    /// # Errors
    ///
    /// Fails if the browser doesn't shut down gracefully; the process is
    /// still reaped by Drop in that case.
    pub async fn close(self) -> Result<()> {
        debug!("closing session");
        self.page.close().await.map_err(SuiteError::from)?;
        self.browser.close().await.map_err(SuiteError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_standard_user_and_empty_cart() {
        let builder = SessionBuilder::default();
        assert_eq!(builder.user, User::Standard);
        assert_eq!(builder.cart, CartSeed::Empty);
        assert!(builder.config.is_none());
    }

    #[test]
    fn builder_axes_compose_independently() {
        let builder = Session::builder()
            .user(User::Problem)
            .cart(CartSeed::Sample(3));
        assert_eq!(builder.user, User::Problem);
        assert_eq!(builder.cart, CartSeed::Sample(3));
    }

    #[tokio::test]
    async fn locked_out_user_is_not_a_buildable_fixture() {
        let result = Session::builder().user(User::LockedOut).build().await;
        assert!(matches!(result, Err(SuiteError::UnsupportedFixture(_))));
    }
}
