//! Checkout information-form tests.
//!
//! Requires Chrome and network access to the deployed demo; run with
//! cargo test --package swaglab-e2e -- --ignored

use swaglab_e2e::logging::init_test_logging;
use swaglab_e2e::pages::CheckoutInfo;
use swaglab_e2e::{CartSeed, Session};

#[tokio::test]
#[ignore] // Requires Chrome and the deployed demo
async fn complete_information_reaches_the_overview() {
    init_test_logging();
    let (session, _) = Session::builder()
        .cart(CartSeed::Sample(2))
        .build()
        .await
        .expect("session");

    let checkout = session.goto_checkout().await.expect("checkout opens");
    checkout
        .fill_and_continue(&CheckoutInfo::new("Jon", "Snow", "123"))
        .await
        .expect("a complete form continues to the overview");

    session.close().await.expect("close");
}

/// Each missing field keeps the form on step one with a visible error.
#[tokio::test]
#[ignore]
async fn missing_fields_are_rejected_by_the_form() {
    init_test_logging();
    let (session, _) = Session::builder().build().await.expect("session");

    let checkout = session.goto_checkout().await.expect("checkout opens");

    let cases = [
        ("", "Doe", "12345"),
        ("John", "", "12345"),
        ("John", "Doe", ""),
    ];

    for (first, last, postal) in cases {
        checkout.first_name().fill(first).await.expect("first name fills");
        checkout.last_name().fill(last).await.expect("last name fills");
        checkout.postal_code().fill(postal).await.expect("postal code fills");
        checkout.continue_button().click().await.expect("submit clicks");

        checkout
            .expect_validation_error()
            .await
            .unwrap_or_else(|e| {
                panic!("({first:?}, {last:?}, {postal:?}) should be rejected: {e}")
            });
        checkout
            .expect_on_information()
            .await
            .expect("still on the information form");
    }

    session.close().await.expect("close");
}

#[tokio::test]
#[ignore]
async fn cancel_returns_to_the_cart() {
    init_test_logging();
    let (session, _) = Session::builder().build().await.expect("session");

    let checkout = session.goto_checkout().await.expect("checkout opens");
    checkout.cancel().await.expect("cancel lands back on the cart");

    session.close().await.expect("close");
}
