//! Integration tests for swaglab-browser-test
//!
//! These tests require Chrome/Chromium to be installed and are marked
//! #[ignore] by default. Run with:
//! cargo test --package swaglab-browser-test -- --ignored

use std::time::Duration;
use swaglab_browser_test::{LaunchOptions, TestBrowser, WaitConfig};

/// A small storefront-shaped fixture page: a product list, an add button
/// per row, a sort select, and an alert trigger.
fn fixture_page() -> String {
    r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>Fixture Shop</title>
    </head>
    <body>
        <h1 id="heading">Fixture Shop</h1>
        <input id="name-field" type="text" value="preset" />
        <select id="sort">
            <option value="az" selected>Name (A to Z)</option>
            <option value="lohi">Price (low to high)</option>
        </select>
        <ul>
            <li class="item" data-price="9.99">Bike Light<button class="add">Add</button></li>
            <li class="item" data-price="29.99">Backpack<button class="add">Add</button></li>
            <li class="item" data-price="7.99">Onesie<button class="add">Add</button></li>
        </ul>
        <span id="added">0</span>
        <button id="alerter" onclick="alert('hello from fixture')">Alert</button>
        <script>
            let added = 0;
            document.querySelectorAll('.add').forEach((b) => {
                b.addEventListener('click', () => {
                    added += 1;
                    document.getElementById('added').innerText = String(added);
                });
            });
        </script>
    </body>
    </html>
    "#
    .to_string()
}

async fn open_fixture(browser: &TestBrowser) -> swaglab_browser_test::Page {
    let page = browser.new_page().await.expect("failed to create page");
    let data_url = format!("data:text/html,{}", urlencoding::encode(&fixture_page()));
    page.goto(&data_url).await.expect("failed to navigate");
    page
}

#[tokio::test]
#[ignore] // Requires Chrome to be installed
async fn browser_launch_and_close() {
    let browser = TestBrowser::launch(LaunchOptions::default())
        .await
        .expect("failed to launch browser");

    assert!(!browser.is_closed().await);

    browser.close().await.expect("failed to close browser");
}

#[tokio::test]
#[ignore]
async fn locator_count_and_texts() {
    let browser = TestBrowser::launch(LaunchOptions::default())
        .await
        .expect("failed to launch");
    let page = open_fixture(&browser).await;

    let items = page.locator(".item");
    assert_eq!(items.count().await.expect("count failed"), 3);

    let texts = items.all_inner_texts().await.expect("texts failed");
    assert!(texts[0].contains("Bike Light"));
    assert!(texts[2].contains("Onesie"));

    browser.close().await.expect("failed to close");
}

#[tokio::test]
#[ignore]
async fn locator_text_filter_and_nth() {
    let browser = TestBrowser::launch(LaunchOptions::default())
        .await
        .expect("failed to launch");
    let page = open_fixture(&browser).await;

    let backpack = page.locator(".item").with_text("Backpack");
    assert_eq!(backpack.count().await.expect("count failed"), 1);
    assert_eq!(
        backpack
            .attribute("data-price")
            .await
            .expect("attribute failed")
            .as_deref(),
        Some("29.99")
    );

    let last = page.locator(".item").nth(2);
    let text = last.inner_text().await.expect("text failed");
    assert!(text.expect("third item should exist").contains("Onesie"));

    browser.close().await.expect("failed to close");
}

#[tokio::test]
#[ignore]
async fn locator_click_drives_native_events() {
    let browser = TestBrowser::launch(LaunchOptions::default())
        .await
        .expect("failed to launch");
    let page = open_fixture(&browser).await;

    page.locator(".add")
        .nth(1)
        .click()
        .await
        .expect("click failed");

    page.locator("#added")
        .expect_text("1", WaitConfig::default())
        .await
        .expect("counter should increment after click");

    browser.close().await.expect("failed to close");
}

#[tokio::test]
#[ignore]
async fn locator_fill_replaces_existing_value() {
    let browser = TestBrowser::launch(LaunchOptions::default())
        .await
        .expect("failed to launch");
    let page = open_fixture(&browser).await;

    let field = page.locator("#name-field");
    field.fill("standard_user").await.expect("fill failed");
    field
        .expect_value("standard_user", WaitConfig::default())
        .await
        .expect("value should be replaced, not appended");

    browser.close().await.expect("failed to close");
}

#[tokio::test]
#[ignore]
async fn select_value_fires_change_events() {
    let browser = TestBrowser::launch(LaunchOptions::default())
        .await
        .expect("failed to launch");
    let page = open_fixture(&browser).await;

    let sort = page.locator("#sort");
    sort.select_value("lohi").await.expect("select failed");
    sort.expect_value("lohi", WaitConfig::default())
        .await
        .expect("select value should update");

    browser.close().await.expect("failed to close");
}

#[tokio::test]
#[ignore]
async fn expect_absent_times_out_on_present_element() {
    let browser = TestBrowser::launch(LaunchOptions::default())
        .await
        .expect("failed to launch");
    let page = open_fixture(&browser).await;

    let config = WaitConfig::new(Duration::from_millis(300), Duration::from_millis(50));
    let result = page.locator("#heading").expect_absent(config).await;
    assert!(result.is_err(), "heading is present, absence must time out");

    let missing = page.locator("#does-not-exist");
    missing
        .expect_absent(WaitConfig::short())
        .await
        .expect("a selector matching nothing is absent");

    browser.close().await.expect("failed to close");
}

#[tokio::test]
#[ignore]
async fn dialogs_are_accepted_and_recorded() {
    let browser = TestBrowser::launch(LaunchOptions::default())
        .await
        .expect("failed to launch");
    let page = open_fixture(&browser).await;

    page.locator("#alerter").click().await.expect("click failed");

    // The alert is accepted by the watcher; the page stays responsive.
    tokio::time::sleep(Duration::from_millis(300)).await;
    let events = page.dialogs().events();
    assert_eq!(events.len(), 1);
    assert!(events[0].message.contains("hello from fixture"));

    assert_eq!(page.locator(".item").count().await.expect("count"), 3);

    browser.close().await.expect("failed to close");
}

#[tokio::test]
#[ignore]
async fn url_reporting_and_matching() {
    let browser = TestBrowser::launch(LaunchOptions::default())
        .await
        .expect("failed to launch");

    let page = browser.new_page().await.expect("failed to create page");
    page.goto("about:blank").await.expect("failed to navigate");

    assert_eq!(page.url().await.expect("url failed"), "about:blank");
    page.expect_url_contains("blank", WaitConfig::short())
        .await
        .expect("url should contain fragment");

    browser.close().await.expect("failed to close");
}

#[tokio::test]
#[ignore]
async fn screenshot_returns_png() {
    let browser = TestBrowser::launch(LaunchOptions::default())
        .await
        .expect("failed to launch");
    let page = open_fixture(&browser).await;

    let screenshot = page.screenshot().await.expect("failed to take screenshot");

    assert!(!screenshot.is_empty());
    // PNG magic bytes: 89 50 4E 47
    assert_eq!(&screenshot[0..4], &[0x89, 0x50, 0x4E, 0x47]);

    browser.close().await.expect("failed to close");
}
