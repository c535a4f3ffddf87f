//! The cart screen.

use crate::catalog::product_by_name;
use crate::error::{Result, SuiteError};
use crate::pages::header::PrimaryHeader;
use crate::pages::line_items::{ItemQuery, LineItems};
use crate::pages::routes;
use swaglab_browser_test::{Locator, Page, WaitConfig};

const TITLE: &str = r#"[data-test="title"]"#;
const QUANTITY_LABEL: &str = r#"[data-test="cart-quantity-label"]"#;
const DESCRIPTION_LABEL: &str = r#"[data-test="cart-desc-label"]"#;
const FOOTER: &str = ".cart_footer";
const CONTINUE_SHOPPING: &str = r#"[data-test="continue-shopping"]"#;
const CHECKOUT: &str = r#"[data-test="checkout"]"#;

/// Page object for the cart screen.
#[derive(Debug, Clone, Copy)]
pub struct CartPage<'a> {
    page: &'a Page,
    waits: WaitConfig,
}

impl<'a> CartPage<'a> {
    /// Binds the page object to a live page.
    #[must_use]
    pub fn new(page: &'a Page, waits: WaitConfig) -> Self {
        Self { page, waits }
    }

    /// The shared primary header.
    #[must_use]
    pub fn header(&self) -> PrimaryHeader<'a> {
        PrimaryHeader::new(self.page, self.waits)
    }

    /// The shared line-item list.
    #[must_use]
    pub fn items(&self) -> LineItems<'a> {
        LineItems::new(self.page, self.waits)
    }

    // -- element accessors --

    /// The "Your Cart" title.
    #[must_use]
    pub fn title(&self) -> Locator {
        self.page.locator(TITLE)
    }

    /// The QTY column label.
    #[must_use]
    pub fn quantity_label(&self) -> Locator {
        self.page.locator(QUANTITY_LABEL)
    }

    /// The Description column label.
    #[must_use]
    pub fn description_label(&self) -> Locator {
        self.page.locator(DESCRIPTION_LABEL)
    }

    /// The footer holding the navigation buttons.
    #[must_use]
    pub fn footer(&self) -> Locator {
        self.page.locator(FOOTER)
    }

    /// The continue-shopping button.
    #[must_use]
    pub fn continue_shopping_button(&self) -> Locator {
        self.page.locator(CONTINUE_SHOPPING)
    }

    /// The checkout button.
    #[must_use]
    pub fn checkout_button(&self) -> Locator {
        self.page.locator(CHECKOUT)
    }

    // -- page assertions --

    /// Asserts the browser is on the cart route.
    ///
    /// # Errors
    ///
    /// Fails if the URL never matches.
    pub async fn expect_on_cart(&self) -> Result<()> {
        self.page.expect_url_contains(routes::CART, self.waits).await?;
        Ok(())
    }

    /// Asserts the header region: route, title, header chrome.
    ///
    /// # Errors
    ///
    /// Fails if any element never appears.
    pub async fn expect_headers_visible(&self) -> Result<()> {
        self.expect_on_cart().await?;
        self.header().expect_visible().await?;
        self.title().expect_text("Your Cart", self.waits).await?;
        Ok(())
    }

    /// Asserts the list region and the footer buttons.
    ///
    /// # Errors
    ///
    /// Fails if any element never appears.
    pub async fn expect_body_and_footer_visible(&self) -> Result<()> {
        self.items().list().expect_visible(self.waits).await?;
        self.quantity_label().expect_visible(self.waits).await?;
        self.description_label().expect_visible(self.waits).await?;
        self.continue_shopping_button()
            .expect_visible(self.waits)
            .await?;
        self.checkout_button().expect_visible(self.waits).await?;
        Ok(())
    }

    /// The whole-page visibility sweep.
    ///
    /// # Errors
    ///
    /// Fails if any element never appears.
    pub async fn expect_page_chrome_visible(&self) -> Result<()> {
        self.expect_headers_visible().await?;
        self.expect_body_and_footer_visible().await?;
        Ok(())
    }

    /// Asserts badge value == rendered line items == rendered Remove
    /// controls, the suite's core cart invariant.
    ///
    /// # Errors
    ///
    /// Fails with [`SuiteError::Mismatch`] on the first divergence.
    pub async fn expect_badge_matches_cart(&self) -> Result<()> {
        let items = self.items().count().await?;
        let removes = self.items().remove_buttons().count().await?;
        let badge = self.header().badge_count().await?;

        if removes != items {
            return Err(SuiteError::mismatch(
                "Remove controls",
                items,
                removes,
            ));
        }
        if badge != items {
            return Err(SuiteError::mismatch("cart badge", items, badge));
        }
        Ok(())
    }

    // -- actions --

    /// Clicks the Remove control of one line item.
    ///
    /// # Errors
    ///
    /// Propagates the line-item lookup errors (empty cart, unknown name,
    /// index out of range) before touching the DOM.
    pub async fn remove(&self, query: ItemQuery<'_>) -> Result<()> {
        // Resolve first so precondition violations surface as themselves,
        // not as a missing-selector click failure.
        let item = self.items().item(query).await?;
        let product = product_by_name(&item.name)?;

        self.page.locator(product.remove_selector()).click().await?;
        Ok(())
    }

    /// Removes one line item and confirms the count and badge both
    /// decrement in step.
    ///
    /// # Errors
    ///
    /// Fails if the decrement never lands or the invariant breaks.
    pub async fn remove_and_expect_decrement(&self, query: ItemQuery<'_>) -> Result<()> {
        let before = self.items().count().await?;
        self.remove(query).await?;
        self.items().expect_count(before - 1).await?;
        self.header().expect_badge(before - 1).await?;
        self.expect_badge_matches_cart().await?;
        Ok(())
    }

    /// Proceeds to checkout step one.
    ///
    /// # Errors
    ///
    /// Fails if the click or the route change doesn't happen.
    pub async fn checkout(&self) -> Result<()> {
        self.checkout_button().click().await?;
        self.page
            .expect_url_contains(routes::CHECKOUT_INFORMATION, self.waits)
            .await?;
        Ok(())
    }

    /// Returns to the inventory page.
    ///
    /// # Errors
    ///
    /// Fails if the click or the route change doesn't happen.
    pub async fn continue_shopping(&self) -> Result<()> {
        self.continue_shopping_button().click().await?;
        self.page
            .expect_url_contains(routes::INVENTORY, self.waits)
            .await?;
        Ok(())
    }
}
