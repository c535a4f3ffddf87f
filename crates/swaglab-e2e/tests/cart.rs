//! Cart-page tests: chrome, contents, removal, lookup preconditions.
//!
//! Requires Chrome and network access to the deployed demo; run with
//! cargo test --package swaglab-e2e -- --ignored

use swaglab_e2e::pages::ItemQuery;
use swaglab_e2e::logging::init_test_logging;
use swaglab_e2e::{CartSeed, Session, SuiteError};

#[tokio::test]
#[ignore] // Requires Chrome and the deployed demo
async fn cart_page_chrome_renders() {
    init_test_logging();
    let (session, _) = Session::builder().build().await.expect("session");

    let cart = session.goto_cart().await.expect("cart opens");
    cart.expect_page_chrome_visible()
        .await
        .expect("headers, list and footer render");

    session.close().await.expect("close");
}

/// An empty cart renders no line items, no badge, and rejects lookups with
/// the empty-cart contract error.
#[tokio::test]
#[ignore]
async fn empty_cart_is_empty_everywhere() {
    init_test_logging();
    let (session, added) = Session::builder()
        .cart(CartSeed::Empty)
        .build()
        .await
        .expect("session");
    assert!(added.is_empty());

    let cart = session.goto_cart().await.expect("cart opens");
    cart.items().expect_count(0).await.expect("no line items");
    cart.header().expect_badge(0).await.expect("no badge element");
    cart.expect_badge_matches_cart().await.expect("invariant holds at zero");

    let lookup = cart.items().item(ItemQuery::ByIndex(0)).await;
    assert!(matches!(lookup, Err(SuiteError::EmptyCart)));

    session.close().await.expect("close");
}

#[tokio::test]
#[ignore]
async fn sampled_cart_renders_exactly_what_was_added() {
    init_test_logging();
    let (session, added) = Session::builder()
        .cart(CartSeed::Sample(3))
        .build()
        .await
        .expect("session");
    assert_eq!(added.len(), 3);

    let cart = session.goto_cart().await.expect("cart opens");
    cart.items()
        .expect_items_match(&added)
        .await
        .expect("line items match the sampled products");
    cart.expect_badge_matches_cart().await.expect("badge invariant");

    session.close().await.expect("close");
}

#[tokio::test]
#[ignore]
async fn full_cart_renders_the_whole_catalog() {
    init_test_logging();
    let (session, added) = Session::builder()
        .cart(CartSeed::All)
        .build()
        .await
        .expect("session");

    let cart = session.goto_cart().await.expect("cart opens");
    cart.items()
        .expect_items_match(&added)
        .await
        .expect("line items match the catalog");
    cart.expect_badge_matches_cart().await.expect("badge invariant");

    session.close().await.expect("close");
}

/// 1. Seed the full catalog and open the cart: count 6, badge "6".
/// 2. Remove items one at a time by name.
/// 3. The count and badge decrement in step; the badge element is gone at 0.
#[tokio::test]
#[ignore]
async fn sequential_removal_decrements_count_and_badge() {
    init_test_logging();
    let (session, added) = Session::builder()
        .cart(CartSeed::All)
        .build()
        .await
        .expect("session");

    let cart = session.goto_cart().await.expect("cart opens");
    cart.items().expect_count(added.len()).await.expect("starts full");
    cart.header().expect_badge(added.len()).await.expect("badge starts at 6");

    for product in &added {
        cart.remove_and_expect_decrement(ItemQuery::ByName(product.name))
            .await
            .unwrap_or_else(|e| panic!("removing '{}' broke the invariant: {e}", product.name));
    }

    cart.header().expect_badge(0).await.expect("badge gone at zero");

    session.close().await.expect("close");
}

#[tokio::test]
#[ignore]
async fn lookup_preconditions_are_contract_errors() {
    init_test_logging();
    let (session, added) = Session::builder()
        .cart(CartSeed::All)
        .build()
        .await
        .expect("session");

    let cart = session.goto_cart().await.expect("cart opens");

    let by_name = cart.items().item(ItemQuery::ByName("Sauce Labs Teapot")).await;
    assert!(matches!(by_name, Err(SuiteError::ItemNotFound(_))));

    let by_index = cart.items().item(ItemQuery::ByIndex(added.len())).await;
    assert!(matches!(
        by_index,
        Err(SuiteError::IndexOutOfRange { index: 6, len: 6 })
    ));

    session.close().await.expect("close");
}
