//! The cart line-item list, shared by the cart and order-overview screens.
//!
//! Both screens render the same `cart-list` DOM region; this view holds the
//! lookup and comparison logic once. Lookups are strict about their
//! preconditions: an empty cart, a name that matches nothing, or an index
//! past the end are each distinct errors, raised immediately.

use crate::catalog::{parse_price, Product};
use crate::error::{Result, SuiteError};
use serde::Deserialize;
use swaglab_browser_test::{Locator, Page, WaitConfig};

const CART_LIST: &str = r#"[data-test="cart-list"]"#;
const ITEMS: &str = r#"[data-test="cart-list"] [data-test="inventory-item"]"#;
const REMOVE_BUTTONS: &str = r#"[data-test="cart-list"] [data-test^="remove-"]"#;

/// How to pick one line item out of the list.
///
/// Replaces the "name or index, caller beware" convention with a closed
/// enum: an ambiguous call is unrepresentable.
#[derive(Debug, Clone, Copy)]
pub enum ItemQuery<'a> {
    /// Pick the line item rendering this product name.
    ByName(&'a str),
    /// Pick the line item at this position (0-based, DOM order).
    ByIndex(usize),
}

/// One rendered line item, captured in a single DOM read.
#[derive(Debug, Clone, Deserialize)]
pub struct LineItem {
    /// Rendered product name.
    pub name: String,
    /// Rendered description.
    pub description: String,
    /// Rendered price text, `$N.NN`.
    pub price: String,
}

/// View over the `cart-list` region of the current page.
#[derive(Debug, Clone, Copy)]
pub struct LineItems<'a> {
    page: &'a Page,
    waits: WaitConfig,
}

impl<'a> LineItems<'a> {
    /// Binds the view to a live page.
    #[must_use]
    pub fn new(page: &'a Page, waits: WaitConfig) -> Self {
        Self { page, waits }
    }

    /// The list container.
    #[must_use]
    pub fn list(&self) -> Locator {
        self.page.locator(CART_LIST)
    }

    /// Every line item in the list.
    #[must_use]
    pub fn items(&self) -> Locator {
        self.page.locator(ITEMS)
    }

    /// Every Remove control in the list.
    #[must_use]
    pub fn remove_buttons(&self) -> Locator {
        self.page.locator(REMOVE_BUTTONS)
    }

    /// Number of line items currently rendered.
    ///
    /// # Errors
    ///
    /// Fails if the DOM query fails.
    pub async fn count(&self) -> Result<usize> {
        Ok(self.items().count().await?)
    }

    /// True when the list renders nothing.
    ///
    /// # Errors
    ///
    /// Fails if the DOM query fails.
    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.count().await? == 0)
    }

    /// Polls until exactly `expected` line items are rendered.
    ///
    /// # Errors
    ///
    /// Fails if the count never settles there.
    pub async fn expect_count(&self, expected: usize) -> Result<()> {
        self.items().expect_count(expected, self.waits).await?;
        Ok(())
    }

    /// Captures every line item's rendered fields in one DOM read.
    ///
    /// # Errors
    ///
    /// Fails if the DOM query fails.
    pub async fn snapshot(&self) -> Result<Vec<LineItem>> {
        let script = format!(
            r#"(() => {{
                const cards = Array.from(document.querySelectorAll('{ITEMS}'));
                return cards.map((card) => {{
                    const text = (sel) => {{
                        const node = card.querySelector(sel);
                        return node ? node.innerText : '';
                    }};
                    return {{
                        name: text('[data-test="inventory-item-name"]'),
                        description: text('[data-test="inventory-item-desc"]'),
                        price: text('[data-test="inventory-item-price"]'),
                    }};
                }});
            }})()"#
        );

        Ok(self.page.evaluate(&script).await?)
    }

    /// Resolves one line item.
    ///
    /// # Errors
    ///
    /// - [`SuiteError::EmptyCart`] when nothing is rendered;
    /// - [`SuiteError::ItemNotFound`] when no item renders the given name;
    /// - [`SuiteError::IndexOutOfRange`] when the index is past the end.
    pub async fn item(&self, query: ItemQuery<'_>) -> Result<LineItem> {
        let snapshot = self.snapshot().await?;
        if snapshot.is_empty() {
            return Err(SuiteError::EmptyCart);
        }

        match query {
            ItemQuery::ByName(name) => snapshot
                .into_iter()
                .find(|item| item.name == name)
                .ok_or_else(|| SuiteError::ItemNotFound(name.to_string())),
            ItemQuery::ByIndex(index) => {
                let len = snapshot.len();
                snapshot
                    .into_iter()
                    .nth(index)
                    .ok_or(SuiteError::IndexOutOfRange { index, len })
            }
        }
    }

    /// The parsed price of one line item.
    ///
    /// # Errors
    ///
    /// Propagates lookup errors; fails on a malformed rendered price.
    pub async fn item_price(&self, query: ItemQuery<'_>) -> Result<rust_decimal::Decimal> {
        let item = self.item(query).await?;
        parse_price(&item.price)
    }

    /// Asserts the rendered list matches `expected` exactly: same count, and
    /// for every product a line item with its name, description and price.
    ///
    /// Order is not asserted; the cart preserves insertion order but the
    /// expectation list may come from a random seed.
    ///
    /// # Errors
    ///
    /// Fails with [`SuiteError::Mismatch`] naming the first divergence.
    pub async fn expect_items_match(&self, expected: &[Product]) -> Result<()> {
        self.expect_count(expected.len()).await?;

        for product in expected {
            let item = self.item(ItemQuery::ByName(product.name)).await?;

            if item.description != product.description {
                return Err(SuiteError::mismatch(
                    format!("description of '{}'", product.name),
                    product.description,
                    &item.description,
                ));
            }

            let rendered = parse_price(&item.price)?;
            if rendered != product.price {
                return Err(SuiteError::mismatch(
                    format!("price of '{}'", product.name),
                    product.price_display(),
                    &item.price,
                ));
            }
        }

        Ok(())
    }
}
