//! Sort-filter tests: rendered order against the pure sort function.
//!
//! Requires Chrome and network access to the deployed demo; run with
//! cargo test --package swaglab-e2e -- --ignored

use swaglab_e2e::logging::init_test_logging;
use swaglab_e2e::{sort_products, Session, SortOrder, CATALOG};

/// 1. With an empty cart, apply each selectable sort mode in turn.
/// 2. The rendered listing must equal the pure sort of the catalog.
#[tokio::test]
#[ignore] // Requires Chrome and the deployed demo
async fn each_sort_mode_reorders_the_listing() {
    init_test_logging();
    let (session, _) = Session::builder().build().await.expect("session");
    let inventory = session.inventory();
    inventory.wait_until_ready().await.expect("inventory ready");

    for order in SortOrder::selectable() {
        inventory
            .apply_sort(order)
            .await
            .unwrap_or_else(|e| panic!("applying {order:?} failed: {e}"));
        inventory
            .expect_sort_applied(order)
            .await
            .expect("select reflects the mode");

        let expected = sort_products(&CATALOG, order);
        inventory
            .expect_listing_matches(&expected, &[])
            .await
            .unwrap_or_else(|e| panic!("{order:?} rendered out of order: {e}"));
    }

    session.close().await.expect("close");
}

/// Sorting must not disturb cart state: cards added to the cart keep their
/// Remove control through every reorder.
#[tokio::test]
#[ignore]
async fn sorting_preserves_cart_controls() {
    init_test_logging();
    let (session, _) = Session::builder().build().await.expect("session");
    let inventory = session.inventory();
    inventory.wait_until_ready().await.expect("inventory ready");

    let in_cart = [&CATALOG[2], &CATALOG[3]];
    for product in in_cart {
        inventory.add_to_cart(product).await.expect("add works");
    }
    inventory.header().expect_badge(2).await.expect("badge shows 2");

    let in_cart_names: Vec<&str> = in_cart.iter().map(|p| p.name).collect();

    for order in SortOrder::selectable() {
        inventory.apply_sort(order).await.expect("sort applies");

        let expected = sort_products(&CATALOG, order);
        inventory
            .expect_listing_matches(&expected, &in_cart_names)
            .await
            .unwrap_or_else(|e| panic!("{order:?} lost cart state: {e}"));
        inventory.header().expect_badge(2).await.expect("badge unchanged");
    }

    session.close().await.expect("close");
}
