//! The primary header, shared by every post-login screen.
//!
//! Owns the burger menu, the shopping-cart link, and the cart badge. The
//! badge invariant the whole suite leans on lives here: at zero items the
//! badge element leaves the DOM entirely; it never renders "0".

use crate::error::{Result, SuiteError};
use crate::pages::routes;
use swaglab_browser_test::{Locator, Page, WaitConfig};

const PRIMARY_HEADER: &str = r#"[data-test="primary-header"]"#;
const BURGER_BUTTON: &str = "#react-burger-menu-btn";
const CART_LINK: &str = r#"[data-test="shopping-cart-link"]"#;
const CART_BADGE: &str = r#"[data-test="shopping-cart-badge"]"#;
const LOGOUT_LINK: &str = r#"[data-test="logout-sidebar-link"]"#;

/// View over the header region of any post-login page.
#[derive(Debug, Clone, Copy)]
pub struct PrimaryHeader<'a> {
    page: &'a Page,
    waits: WaitConfig,
}

impl<'a> PrimaryHeader<'a> {
    /// Binds the header view to a live page.
    #[must_use]
    pub fn new(page: &'a Page, waits: WaitConfig) -> Self {
        Self { page, waits }
    }

    /// The header container.
    #[must_use]
    pub fn container(&self) -> Locator {
        self.page.locator(PRIMARY_HEADER)
    }

    /// The burger-menu button.
    #[must_use]
    pub fn burger_button(&self) -> Locator {
        self.page.locator(BURGER_BUTTON)
    }

    /// The shopping-cart link.
    #[must_use]
    pub fn cart_link(&self) -> Locator {
        self.page.locator(CART_LINK)
    }

    /// The cart badge. Absent from the DOM when the cart is empty.
    #[must_use]
    pub fn cart_badge(&self) -> Locator {
        self.page.locator(CART_BADGE)
    }

    /// Asserts the header chrome is rendered.
    ///
    /// # Errors
    ///
    /// Fails if any header element never becomes visible.
    pub async fn expect_visible(&self) -> Result<()> {
        self.container().expect_visible(self.waits).await?;
        self.burger_button().expect_visible(self.waits).await?;
        self.cart_link().expect_visible(self.waits).await?;
        Ok(())
    }

    /// The badge value as a count; an absent badge reads as zero.
    ///
    /// # Errors
    ///
    /// Fails if the badge renders something that is not a number.
    pub async fn badge_count(&self) -> Result<usize> {
        let badge = self.cart_badge();
        if !badge.exists().await? {
            return Ok(0);
        }

        let text = badge.inner_text().await?.unwrap_or_default();
        text.trim()
            .parse::<usize>()
            .map_err(|_| SuiteError::mismatch("cart badge", "a number", &text))
    }

    /// Asserts the badge shows `expected` — or is gone when `expected` is 0.
    ///
    /// # Errors
    ///
    /// Fails if the badge never settles on the expected state.
    pub async fn expect_badge(&self, expected: usize) -> Result<()> {
        let badge = self.cart_badge();
        if expected == 0 {
            badge.expect_absent(self.waits).await?;
        } else {
            badge.expect_visible(self.waits).await?;
            badge.expect_text(&expected.to_string(), self.waits).await?;
        }
        Ok(())
    }

    /// Navigates to the cart page via the cart link.
    ///
    /// # Errors
    ///
    /// Fails if the click or the route change doesn't happen.
    pub async fn open_cart(&self) -> Result<()> {
        self.cart_link().click().await?;
        self.page.expect_url_contains(routes::CART, self.waits).await?;
        Ok(())
    }

    /// Logs out through the burger menu.
    ///
    /// The sidebar animates in, so the logout link is waited for before the
    /// click.
    ///
    /// # Errors
    ///
    /// Fails if the menu or the logout link never appears.
    pub async fn logout(&self) -> Result<()> {
        self.burger_button().click().await?;

        let logout = self.page.locator(LOGOUT_LINK);
        logout.expect_visible(self.waits).await?;
        logout.click().await?;
        Ok(())
    }
}
