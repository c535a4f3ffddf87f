//! The login screen.

use crate::error::Result;
use crate::pages::routes;
use crate::users::User;
use swaglab_browser_test::{Locator, Page, TargetApp, WaitConfig};
use tracing::info;

const USERNAME_FIELD: &str = r#"input[name="user-name"]"#;
const PASSWORD_FIELD: &str = r#"input[name="password"]"#;
const SUBMIT_BUTTON: &str = r#"input[name="login-button"]"#;
const LOGO: &str = ".login_logo";
const ERROR_BOX: &str = r#"[data-test="error"]"#;

/// Page object for the login screen.
#[derive(Debug, Clone, Copy)]
pub struct LoginPage<'a> {
    page: &'a Page,
    waits: WaitConfig,
}

impl<'a> LoginPage<'a> {
    /// Binds the page object to a live page.
    #[must_use]
    pub fn new(page: &'a Page, waits: WaitConfig) -> Self {
        Self { page, waits }
    }

    // -- element accessors --

    /// The username input.
    #[must_use]
    pub fn username(&self) -> Locator {
        self.page.locator(USERNAME_FIELD)
    }

    /// The password input.
    #[must_use]
    pub fn password(&self) -> Locator {
        self.page.locator(PASSWORD_FIELD)
    }

    /// The login submit button.
    #[must_use]
    pub fn submit(&self) -> Locator {
        self.page.locator(SUBMIT_BUTTON)
    }

    /// The "Swag Labs" logo heading.
    #[must_use]
    pub fn logo(&self) -> Locator {
        self.page.locator(LOGO)
    }

    /// The error box rendered on failed logins.
    #[must_use]
    pub fn error_box(&self) -> Locator {
        self.page.locator(ERROR_BOX)
    }

    // -- navigation --

    /// Opens the login page on the target deployment.
    ///
    /// # Errors
    ///
    /// Fails if navigation fails.
    pub async fn open(&self, target: &dyn TargetApp) -> Result<()> {
        self.page.goto_on(target, "/").await?;
        Ok(())
    }

    /// Waits until the form fields and branding are rendered.
    ///
    /// # Errors
    ///
    /// Fails if any field never appears.
    pub async fn wait_until_ready(&self) -> Result<()> {
        for field in [self.username(), self.password(), self.logo()] {
            field.expect_visible(self.waits).await?;
        }
        Ok(())
    }

    // -- actions --

    /// Fills the username field.
    ///
    /// # Errors
    ///
    /// Fails if the field can't be filled.
    pub async fn enter_username(&self, username: &str) -> Result<()> {
        self.username().fill(username).await?;
        Ok(())
    }

    /// Fills the password field.
    ///
    /// # Errors
    ///
    /// Fails if the field can't be filled.
    pub async fn enter_password(&self, password: &str) -> Result<()> {
        self.password().fill(password).await?;
        Ok(())
    }

    /// Submits the form.
    ///
    /// # Errors
    ///
    /// Fails if the button can't be clicked.
    pub async fn press_login(&self) -> Result<()> {
        self.submit().click().await?;
        Ok(())
    }

    /// Enters the account's credentials and submits.
    ///
    /// # Errors
    ///
    /// Fails if any step fails.
    pub async fn login(&self, user: User) -> Result<()> {
        info!("logging in as {}", user.username());
        self.enter_username(user.username()).await?;
        self.enter_password(user.password()).await?;
        self.press_login().await?;
        Ok(())
    }

    // -- post-action assertions --

    /// Waits until the inventory route confirms a successful login.
    ///
    /// # Errors
    ///
    /// Fails if the route never changes (wrong credentials, locked account).
    pub async fn wait_for_successful_login(&self) -> Result<()> {
        self.page
            .expect_url_contains(routes::INVENTORY, self.waits)
            .await?;
        Ok(())
    }

    /// Waits for the login error box and checks its message.
    ///
    /// # Errors
    ///
    /// Fails if no error appears or the message doesn't mention `needle`.
    pub async fn expect_login_error(&self, needle: &str) -> Result<()> {
        self.error_box().expect_visible(self.waits).await?;
        self.error_box()
            .expect_text_contains(needle, self.waits)
            .await?;
        Ok(())
    }

    // -- flows --

    /// Full login flow: open, wait for the form, authenticate, confirm the
    /// inventory page loaded.
    ///
    /// # Errors
    ///
    /// Fails if any step fails.
    pub async fn open_and_login(&self, target: &dyn TargetApp, user: User) -> Result<()> {
        self.open(target).await?;
        self.wait_until_ready().await?;
        self.login(user).await?;
        self.wait_for_successful_login().await?;
        Ok(())
    }
}
