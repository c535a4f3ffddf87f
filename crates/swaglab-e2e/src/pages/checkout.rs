//! Checkout step one: the customer information form.

use crate::error::{Result, SuiteError};
use crate::pages::routes;
use swaglab_browser_test::{Locator, Page, WaitConfig};

const FIRST_NAME: &str = r#"[data-test="firstName"]"#;
const LAST_NAME: &str = r#"[data-test="lastName"]"#;
const POSTAL_CODE: &str = r#"[data-test="postalCode"]"#;
const CONTINUE: &str = r#"[data-test="continue"]"#;
const CANCEL: &str = r#"[data-test="cancel"]"#;
const ERROR_BOX: &str = r#"[data-test="error"]"#;
const TITLE: &str = r#"[data-test="title"]"#;

/// The information the form requires. All three fields are mandatory.
#[derive(Debug, Clone)]
pub struct CheckoutInfo {
    /// Customer first name.
    pub first_name: String,
    /// Customer last name.
    pub last_name: String,
    /// Shipping postal code.
    pub postal_code: String,
}

impl CheckoutInfo {
    /// Builds checkout information.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            postal_code: postal_code.into(),
        }
    }

    /// A throwaway identity for flows that only need to get past the form.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new("Jon", "Snow", "12345")
    }

    /// Checks all required fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::IncompleteCheckoutInfo`] naming the first
    /// missing field.
    pub fn validate(&self) -> Result<()> {
        if self.first_name.is_empty() {
            return Err(SuiteError::IncompleteCheckoutInfo("first name"));
        }
        if self.last_name.is_empty() {
            return Err(SuiteError::IncompleteCheckoutInfo("last name"));
        }
        if self.postal_code.is_empty() {
            return Err(SuiteError::IncompleteCheckoutInfo("postal code"));
        }
        Ok(())
    }
}

/// Page object for the checkout information form.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutPage<'a> {
    page: &'a Page,
    waits: WaitConfig,
}

impl<'a> CheckoutPage<'a> {
    /// Binds the page object to a live page.
    #[must_use]
    pub fn new(page: &'a Page, waits: WaitConfig) -> Self {
        Self { page, waits }
    }

    // -- element accessors --

    /// The "Checkout: Your Information" title.
    #[must_use]
    pub fn title(&self) -> Locator {
        self.page.locator(TITLE)
    }

    /// The first-name input.
    #[must_use]
    pub fn first_name(&self) -> Locator {
        self.page.locator(FIRST_NAME)
    }

    /// The last-name input.
    #[must_use]
    pub fn last_name(&self) -> Locator {
        self.page.locator(LAST_NAME)
    }

    /// The postal-code input.
    #[must_use]
    pub fn postal_code(&self) -> Locator {
        self.page.locator(POSTAL_CODE)
    }

    /// The continue button.
    #[must_use]
    pub fn continue_button(&self) -> Locator {
        self.page.locator(CONTINUE)
    }

    /// The cancel button.
    #[must_use]
    pub fn cancel_button(&self) -> Locator {
        self.page.locator(CANCEL)
    }

    /// The validation error box.
    #[must_use]
    pub fn error_box(&self) -> Locator {
        self.page.locator(ERROR_BOX)
    }

    // -- page assertions --

    /// Asserts the browser is on the information form.
    ///
    /// # Errors
    ///
    /// Fails if the URL never matches.
    pub async fn expect_on_information(&self) -> Result<()> {
        self.page
            .expect_url_contains(routes::CHECKOUT_INFORMATION, self.waits)
            .await?;
        Ok(())
    }

    /// Waits for the form fields.
    ///
    /// # Errors
    ///
    /// Fails if any field never appears.
    pub async fn wait_until_ready(&self) -> Result<()> {
        for field in [
            self.first_name(),
            self.last_name(),
            self.postal_code(),
            self.continue_button(),
        ] {
            field.expect_visible(self.waits).await?;
        }
        Ok(())
    }

    /// Asserts the submitted form was rejected with a visible error.
    ///
    /// # Errors
    ///
    /// Fails if the error box never appears.
    pub async fn expect_validation_error(&self) -> Result<()> {
        self.error_box().expect_visible(self.waits).await?;
        Ok(())
    }

    // -- actions --

    /// Fills the three required fields, rejecting incomplete information
    /// before touching the DOM.
    ///
    /// Negative tests drive the field accessors directly to submit bad
    /// input; this entry point is for flows that must succeed.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::IncompleteCheckoutInfo`] for a missing field,
    /// or driver errors from filling.
    pub async fn fill_details(&self, info: &CheckoutInfo) -> Result<()> {
        info.validate()?;

        self.first_name().fill(&info.first_name).await?;
        self.last_name().fill(&info.last_name).await?;
        self.postal_code().fill(&info.postal_code).await?;
        Ok(())
    }

    /// Fills the form and continues to the order overview.
    ///
    /// # Errors
    ///
    /// Fails if validation, filling, or the route change fails.
    pub async fn fill_and_continue(&self, info: &CheckoutInfo) -> Result<()> {
        self.fill_details(info).await?;
        self.continue_button().click().await?;
        self.page
            .expect_url_contains(routes::CHECKOUT_OVERVIEW, self.waits)
            .await?;
        Ok(())
    }

    /// Cancels back to the cart.
    ///
    /// # Errors
    ///
    /// Fails if the click or the route change doesn't happen.
    pub async fn cancel(&self) -> Result<()> {
        self.cancel_button().click().await?;
        self.page.expect_url_contains(routes::CART, self.waits).await?;
        Ok(())
    }
}
