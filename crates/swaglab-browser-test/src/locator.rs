//! Lazy element handles: locate, act, assert-with-wait.
//!
//! A [`Locator`] is a recipe, not a node: a CSS selector plus an optional
//! has-text filter and an optional index. Every query and action re-runs the
//! recipe against the live DOM, so a locator held across a re-render never
//! goes stale and never caches a result.
//!
//! Queries run as injected JavaScript with all operands JSON-encoded (the
//! same injection-safe escaping the whole crate uses for dynamic script
//! input). Actions resolve a real element handle and drive native input
//! events so the application sees trusted clicks and keystrokes.

use crate::error::{DriverError, Result};
use crate::wait::{wait_until, WaitConfig};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page as ChromePage;
use std::sync::Arc;

/// A lazy, re-queried handle on zero or more DOM elements.
///
/// Cheap to clone and to narrow: [`Locator::with_text`] and [`Locator::nth`]
/// return refined copies without touching the page.
#[derive(Debug, Clone)]
pub struct Locator {
    page: Arc<ChromePage>,
    selector: String,
    has_text: Option<String>,
    index: Option<usize>,
}

impl Locator {
    pub(crate) fn new(page: Arc<ChromePage>, selector: impl Into<String>) -> Self {
        Self {
            page,
            selector: selector.into(),
            has_text: None,
            index: None,
        }
    }

    /// Narrows to elements whose rendered text contains `text`.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.has_text = Some(text.into());
        self
    }

    /// Narrows to the `index`-th element of the matched (and filtered) set.
    #[must_use]
    pub fn nth(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Human-readable description of this locator, used in error messages
    /// and wait-condition descriptions.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = format!("'{}'", self.selector);
        if let Some(text) = &self.has_text {
            out.push_str(&format!(" containing \"{text}\""));
        }
        if let Some(index) = self.index {
            out.push_str(&format!(" [{index}]"));
        }
        out
    }

    /// Builds the query script: select, filter, index, then run `body` with
    /// the surviving `nodes` array in scope.
    ///
    /// All operands are JSON-encoded so selectors and filter text cannot
    /// break out of the script.
    #[allow(clippy::result_large_err)]
    fn query_script(&self, body: &str) -> Result<String> {
        let selector = json_operand(&self.selector)?;
        let needle = json_operand(&self.has_text)?;
        let index = json_operand(&self.index)?;

        Ok(format!(
            r"(() => {{
                let nodes = Array.from(document.querySelectorAll({selector}));
                const needle = {needle};
                if (needle !== null) {{
                    nodes = nodes.filter((n) => (n.innerText || '').includes(needle));
                }}
                const index = {index};
                if (index !== null) {{
                    nodes = index < nodes.length ? [nodes[index]] : [];
                }}
                {body}
            }})()"
        ))
    }

    async fn query<T>(&self, body: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let script = self.query_script(body)?;
        let result = self
            .page
            .evaluate(script.as_str())
            .await
            .map_err(|e| DriverError::ScriptFailed(e.to_string()))?;

        result
            .into_value()
            .map_err(|e| DriverError::ScriptFailed(e.to_string()))
    }

    // ---- queries ----

    /// Number of elements currently matching this locator.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn count(&self) -> Result<usize> {
        self.query("return nodes.length;").await
    }

    /// True if at least one element currently matches.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn exists(&self) -> Result<bool> {
        Ok(self.count().await? > 0)
    }

    /// True if the first match is rendered (takes up layout space).
    ///
    /// A locator matching nothing is simply not visible, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn is_visible(&self) -> Result<bool> {
        self.query(
            "return nodes.length > 0
                && !!(nodes[0].offsetParent || nodes[0].getClientRects().length);",
        )
        .await
    }

    /// Rendered text of the first match, `None` when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn inner_text(&self) -> Result<Option<String>> {
        self.query("return nodes.length ? nodes[0].innerText : null;")
            .await
    }

    /// Rendered text of every match, in DOM order.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn all_inner_texts(&self) -> Result<Vec<String>> {
        self.query("return nodes.map((n) => n.innerText);").await
    }

    /// An attribute of the first match; `None` when nothing matches or the
    /// attribute is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
        let encoded = json_operand(&name)?;
        self.query(&format!(
            "return nodes.length ? nodes[0].getAttribute({encoded}) : null;"
        ))
        .await
    }

    /// The form `value` of the first match (inputs and selects).
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn value(&self) -> Result<Option<String>> {
        self.query("return nodes.length ? (nodes[0].value ?? null) : null;")
            .await
    }

    // ---- actions ----

    /// Resolves the recipe to a live element handle for native interaction.
    async fn resolve(&self) -> Result<Element> {
        let elements = self
            .page
            .find_elements(self.selector.as_str())
            .await
            .map_err(|e| DriverError::ScriptFailed(e.to_string()))?;

        let mut matched = Vec::new();
        if let Some(needle) = &self.has_text {
            for element in elements {
                let text = element
                    .inner_text()
                    .await
                    .map_err(|e| DriverError::ScriptFailed(e.to_string()))?
                    .unwrap_or_default();
                if text.contains(needle) {
                    matched.push(element);
                }
            }
        } else {
            matched = elements;
        }

        let count = matched.len();
        if count == 0 {
            return Err(DriverError::ElementNotFound {
                selector: self.describe(),
            });
        }

        let index = self.index.unwrap_or(0);
        matched
            .into_iter()
            .nth(index)
            .ok_or(DriverError::IndexOutOfBounds {
                selector: self.selector.clone(),
                index,
                count,
            })
    }

    /// Clicks the resolved element with a native, trusted mouse event.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::ElementNotFound`] /
    /// [`DriverError::IndexOutOfBounds`] if resolution fails, or a script
    /// error if the click itself does.
    pub async fn click(&self) -> Result<()> {
        let element = self.resolve().await?;
        element
            .scroll_into_view()
            .await
            .map_err(|e| DriverError::ScriptFailed(e.to_string()))?;
        element
            .click()
            .await
            .map_err(|e| DriverError::ScriptFailed(e.to_string()))?;
        Ok(())
    }

    /// Clears the resolved input and types `text` with native keystrokes.
    ///
    /// # Errors
    ///
    /// Returns an error if resolution, clearing, or typing fails.
    pub async fn fill(&self, text: &str) -> Result<()> {
        let element = self.resolve().await?;
        element
            .click()
            .await
            .map_err(|e| DriverError::ScriptFailed(e.to_string()))?;
        element
            .call_js_fn("function() { this.value = ''; }", false)
            .await
            .map_err(|e| DriverError::ScriptFailed(e.to_string()))?;
        element
            .type_str(text)
            .await
            .map_err(|e| DriverError::ScriptFailed(e.to_string()))?;
        Ok(())
    }

    /// Sets a `<select>`'s value and fires the input/change events the
    /// application listens for.
    ///
    /// # Errors
    ///
    /// Returns an error if resolution or the script fails.
    pub async fn select_value(&self, option_value: &str) -> Result<()> {
        let element = self.resolve().await?;
        let encoded = json_operand(&option_value)?;
        let script = format!(
            "function() {{
                this.value = {encoded};
                this.dispatchEvent(new Event('input', {{ bubbles: true }}));
                this.dispatchEvent(new Event('change', {{ bubbles: true }}));
            }}"
        );
        element
            .call_js_fn(script, false)
            .await
            .map_err(|e| DriverError::ScriptFailed(e.to_string()))?;
        Ok(())
    }

    // ---- assertions with built-in wait ----

    /// Polls until the locator is visible.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::WaitTimeout`] if it never becomes visible.
    pub async fn expect_visible(&self, config: WaitConfig) -> Result<()> {
        wait_until(
            || async { self.is_visible().await },
            config,
            &format!("{} visible", self.describe()),
        )
        .await
    }

    /// Polls until nothing matches the locator.
    ///
    /// Distinct from "not visible": the element must leave the DOM
    /// entirely, the way the cart badge does at zero items.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::WaitTimeout`] if a match persists.
    pub async fn expect_absent(&self, config: WaitConfig) -> Result<()> {
        wait_until(
            || async { Ok(self.count().await? == 0) },
            config,
            &format!("{} absent", self.describe()),
        )
        .await
    }

    /// Polls until exactly `expected` elements match.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::WaitTimeout`] if the count never settles there.
    pub async fn expect_count(&self, expected: usize, config: WaitConfig) -> Result<()> {
        wait_until(
            || async { Ok(self.count().await? == expected) },
            config,
            &format!("{} count == {expected}", self.describe()),
        )
        .await
    }

    /// Polls until the first match's trimmed text equals `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::WaitTimeout`] if the text never matches.
    pub async fn expect_text(&self, expected: &str, config: WaitConfig) -> Result<()> {
        wait_until(
            || async {
                Ok(self
                    .inner_text()
                    .await?
                    .is_some_and(|t| t.trim() == expected))
            },
            config,
            &format!("{} text == \"{expected}\"", self.describe()),
        )
        .await
    }

    /// Polls until the first match's text contains `needle`.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::WaitTimeout`] if the text never contains it.
    pub async fn expect_text_contains(&self, needle: &str, config: WaitConfig) -> Result<()> {
        wait_until(
            || async { Ok(self.inner_text().await?.is_some_and(|t| t.contains(needle))) },
            config,
            &format!("{} text contains \"{needle}\"", self.describe()),
        )
        .await
    }

    /// Polls until the attribute `name` contains `needle`.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::WaitTimeout`] if it never does.
    pub async fn expect_attribute_contains(
        &self,
        name: &str,
        needle: &str,
        config: WaitConfig,
    ) -> Result<()> {
        wait_until(
            || async {
                Ok(self
                    .attribute(name)
                    .await?
                    .is_some_and(|v| v.contains(needle)))
            },
            config,
            &format!("{} [{name}] contains \"{needle}\"", self.describe()),
        )
        .await
    }

    /// Polls until the form value equals `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::WaitTimeout`] if it never does.
    pub async fn expect_value(&self, expected: &str, config: WaitConfig) -> Result<()> {
        wait_until(
            || async { Ok(self.value().await?.as_deref() == Some(expected)) },
            config,
            &format!("{} value == \"{expected}\"", self.describe()),
        )
        .await
    }
}

/// JSON-encodes a script operand; `None` becomes the literal `null`.
#[allow(clippy::result_large_err)]
fn json_operand<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| DriverError::ScriptFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    // Browser-backed behavior is covered in tests/integration.rs; these
    // tests pin the script-building and escaping logic.

    #[test]
    fn selector_escaping_with_json() {
        let cases = vec![
            (r"div", r#""div""#),
            (r"'injected'", r#""'injected'""#),
            (r"`injected`", r#""`injected`""#),
        ];

        for (input, expected) in cases {
            let escaped = serde_json::to_string(&input).unwrap();
            assert_eq!(escaped, expected);
        }
    }

    #[test]
    fn json_escaping_neutralizes_special_chars() {
        let dangerous = r"'); alert('xss');//";
        let escaped = serde_json::to_string(&dangerous).unwrap();

        assert!(escaped.starts_with('"') && escaped.ends_with('"'));
        assert!(escaped.len() > dangerous.len());
    }

    #[test]
    fn optional_operands_encode_to_null() {
        let none: Option<String> = None;
        assert_eq!(serde_json::to_string(&none).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Some("Backpack".to_string())).unwrap(),
            r#""Backpack""#
        );
        assert_eq!(serde_json::to_string(&Some(3_usize)).unwrap(), "3");
    }
}
