//! Checkout step two: the order overview with computed totals.

use crate::catalog::{parse_price, Product};
use crate::error::{Result, SuiteError};
use crate::pages::header::PrimaryHeader;
use crate::pages::line_items::LineItems;
use crate::pages::routes;
use rust_decimal::Decimal;
use swaglab_browser_test::{Locator, Page, WaitConfig};

const TITLE: &str = r#"[data-test="title"]"#;
const PAYMENT_INFO: &str = r#"[data-test="payment-info-label"]"#;
const SHIPPING_INFO: &str = r#"[data-test="shipping-info-label"]"#;
const SUBTOTAL: &str = r#"[data-test="subtotal-label"]"#;
const TAX: &str = r#"[data-test="tax-label"]"#;
const GRAND_TOTAL: &str = r#"[data-test="total-label"]"#;
const FINISH: &str = r#"[data-test="finish"]"#;
const CANCEL: &str = r#"[data-test="cancel"]"#;
const COMPLETE_HEADER: &str = r#"[data-test="complete-header"]"#;

/// Totals must land within a cent of the computed value.
const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Page object for the order overview.
#[derive(Debug, Clone, Copy)]
pub struct OrderPage<'a> {
    page: &'a Page,
    waits: WaitConfig,
}

impl<'a> OrderPage<'a> {
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

    /// The "Checkout: Overview" title.
    #[must_use]
    pub fn title(&self) -> Locator {
        self.page.locator(TITLE)
    }

    /// The payment information label.
    #[must_use]
    pub fn payment_info(&self) -> Locator {
        self.page.locator(PAYMENT_INFO)
    }

    /// The shipping information label.
    #[must_use]
    pub fn shipping_info(&self) -> Locator {
        self.page.locator(SHIPPING_INFO)
    }

    /// The item subtotal line.
    #[must_use]
    pub fn subtotal_label(&self) -> Locator {
        self.page.locator(SUBTOTAL)
    }

    /// The tax line.
    #[must_use]
    pub fn tax_label(&self) -> Locator {
        self.page.locator(TAX)
    }

    /// The grand total line.
    #[must_use]
    pub fn grand_total_label(&self) -> Locator {
        self.page.locator(GRAND_TOTAL)
    }

    /// The finish button.
    #[must_use]
    pub fn finish_button(&self) -> Locator {
        self.page.locator(FINISH)
    }

    /// The cancel button.
    #[must_use]
    pub fn cancel_button(&self) -> Locator {
        self.page.locator(CANCEL)
    }

    // -- page assertions --

    /// Asserts the browser is on the overview route.
    ///
    /// # Errors
    ///
    /// Fails if the URL never matches.
    pub async fn expect_on_overview(&self) -> Result<()> {
        self.page
            .expect_url_contains(routes::CHECKOUT_OVERVIEW, self.waits)
            .await?;
        Ok(())
    }

    /// Waits for the full overview: header chrome, item list, info labels
    /// and the three totals.
    ///
    /// # Errors
    ///
    /// Fails if any field never appears.
    pub async fn wait_until_ready(&self) -> Result<()> {
        self.header().expect_visible().await?;
        self.title().expect_visible(self.waits).await?;
        self.items().list().expect_visible(self.waits).await?;
        for field in [
            self.payment_info(),
            self.shipping_info(),
            self.subtotal_label(),
            self.tax_label(),
            self.grand_total_label(),
        ] {
            field.expect_visible(self.waits).await?;
        }
        Ok(())
    }

    /// Asserts badge value == rendered line items.
    ///
    /// # Errors
    ///
    /// Fails with [`SuiteError::Mismatch`] on divergence.
    pub async fn expect_badge_matches_cart(&self) -> Result<()> {
        let items = self.items().count().await?;
        let badge = self.header().badge_count().await?;

        if badge != items {
            return Err(SuiteError::mismatch("cart badge", items, badge));
        }
        Ok(())
    }

    // -- totals --

    /// The rendered item subtotal.
    ///
    /// # Errors
    ///
    /// Fails if the line is missing or malformed.
    pub async fn subtotal(&self) -> Result<Decimal> {
        self.money_line(self.subtotal_label(), "item subtotal").await
    }

    /// The rendered tax.
    ///
    /// # Errors
    ///
    /// Fails if the line is missing or malformed.
    pub async fn tax(&self) -> Result<Decimal> {
        self.money_line(self.tax_label(), "tax").await
    }

    /// The rendered grand total.
    ///
    /// # Errors
    ///
    /// Fails if the line is missing or malformed.
    pub async fn grand_total(&self) -> Result<Decimal> {
        self.money_line(self.grand_total_label(), "grand total").await
    }

    async fn money_line(&self, locator: Locator, what: &str) -> Result<Decimal> {
        locator.expect_visible(self.waits).await?;
        let text = locator
            .inner_text()
            .await?
            .ok_or_else(|| SuiteError::mismatch(what, "a money line", "<missing>"))?;
        parse_price(&text)
    }

    /// Asserts the arithmetic of the overview against the expectation list:
    /// the rendered line-item prices sum to the products' prices, the
    /// subtotal equals that sum, and grand total = subtotal + tax — each
    /// within a cent.
    ///
    /// # Errors
    ///
    /// Fails with [`SuiteError::Mismatch`] naming the broken relation.
    pub async fn expect_totals_consistent(&self, expected: &[Product]) -> Result<()> {
        self.items().expect_count(expected.len()).await?;

        let expected_sum: Decimal = expected.iter().map(|p| p.price).sum();

        let rendered: Vec<_> = self.items().snapshot().await?;
        let mut rendered_sum = Decimal::ZERO;
        for item in &rendered {
            rendered_sum += parse_price(&item.price)?;
        }

        if (rendered_sum - expected_sum).abs() > CENT {
            return Err(SuiteError::mismatch(
                "sum of line-item prices",
                expected_sum,
                rendered_sum,
            ));
        }

        let subtotal = self.subtotal().await?;
        if (subtotal - expected_sum).abs() > CENT {
            return Err(SuiteError::mismatch("item subtotal", expected_sum, subtotal));
        }

        let tax = self.tax().await?;
        let grand_total = self.grand_total().await?;
        if (grand_total - (subtotal + tax)).abs() > CENT {
            return Err(SuiteError::mismatch(
                "grand total",
                subtotal + tax,
                grand_total,
            ));
        }

        Ok(())
    }

    // -- actions --

    /// Completes the order and waits for the confirmation header.
    ///
    /// # Errors
    ///
    /// Fails if the click or the confirmation doesn't happen.
    pub async fn finish(&self) -> Result<()> {
        self.finish_button().click().await?;
        self.page
            .locator(COMPLETE_HEADER)
            .expect_visible(self.waits)
            .await?;
        Ok(())
    }

    /// Cancels back to the inventory page.
    ///
    /// # Errors
    ///
    /// Fails if the click or the route change doesn't happen.
    pub async fn cancel(&self) -> Result<()> {
        self.cancel_button().click().await?;
        self.page
            .expect_url_contains(routes::INVENTORY, self.waits)
            .await?;
        Ok(())
    }
}
