//! Visual snapshot tests.
//!
//! First run writes baselines under the configured snapshot directory;
//! later runs compare against them. The visual account intentionally
//! glitches, so its comparison runs with a looser threshold.
//!
//! Requires Chrome and network access to the deployed demo; run with
//! cargo test --package swaglab-e2e -- --ignored

use swaglab_e2e::logging::init_test_logging;
use swaglab_e2e::visual::{SnapshotStore, SnapshotVerdict};
use swaglab_e2e::{Config, Session, User};

#[tokio::test]
#[ignore] // Requires Chrome and the deployed demo
async fn standard_inventory_matches_its_baseline() {
    init_test_logging();
    let config = Config::load().expect("config should load");
    let store = SnapshotStore::open(&config.snapshot_dir).expect("snapshot dir");

    let (session, _) = Session::builder()
        .config(config)
        .build()
        .await
        .expect("session");
    session
        .inventory()
        .wait_until_ready()
        .await
        .expect("inventory ready");

    let png = session.page().screenshot().await.expect("screenshot");
    let verdict = store.check("inventory_standard", &png).expect("comparison runs");
    assert!(
        !matches!(verdict, SnapshotVerdict::Mismatch { .. }),
        "standard inventory diverged from its baseline: {verdict:?}"
    );

    session.close().await.expect("close");
}

#[tokio::test]
#[ignore]
async fn visual_user_inventory_is_tracked_with_a_loose_threshold() {
    init_test_logging();
    let config = Config::load().expect("config should load");
    let store = SnapshotStore::open(&config.snapshot_dir)
        .expect("snapshot dir")
        .with_max_diff_ratio(0.05);

    let (session, _) = Session::builder()
        .config(config)
        .user(User::Visual)
        .build()
        .await
        .expect("session");
    session
        .inventory()
        .wait_until_ready()
        .await
        .expect("inventory ready");

    let png = session.page().screenshot().await.expect("screenshot");
    let verdict = store
        .check("inventory_visual_user", &png)
        .expect("comparison runs");
    assert!(
        !matches!(verdict, SnapshotVerdict::Mismatch { .. }),
        "visual-user inventory drifted past the loose threshold: {verdict:?}"
    );

    session.close().await.expect("close");
}
