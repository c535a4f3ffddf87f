//! Polling primitives for UI readiness.
//!
//! A rendered page converges on the expected state some unknown time after
//! an action, so every assertion in this crate is a poll loop: probe, sleep,
//! probe again, until the condition holds or the time budget runs out. The
//! timeout is the only abort mechanism; there are no retries beyond the loop
//! itself.

use crate::error::{DriverError, Result};
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Default timeout for wait operations (10 seconds).
///
/// UI transitions in the target app settle well under a second; ten seconds
/// absorbs CI jitter without stalling a failing run for long.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default poll interval for checking conditions (100ms).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Configuration for wait operations.
///
/// Allows customizing timeout and poll interval for different scenarios;
/// negative tests use a short budget so the expected absence of an element
/// doesn't cost the full default.
#[derive(Debug, Clone, Copy)]
pub struct WaitConfig {
    /// Maximum time to wait for the condition.
    pub timeout: Duration,

    /// How often to check if the condition is satisfied.
    pub poll_interval: Duration,
}

impl WaitConfig {
    /// Creates a new wait configuration.
    #[must_use]
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    /// Creates a config with a custom timeout and the default poll interval.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(timeout, DEFAULT_POLL_INTERVAL)
    }

    /// A tight budget for conditions expected to already hold (or to assert
    /// that something never appears).
    #[must_use]
    pub fn short() -> Self {
        Self::new(Duration::from_secs(2), Duration::from_millis(50))
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_POLL_INTERVAL)
    }
}

/// Polls a fallible boolean condition until it holds.
///
/// The probe is called repeatedly at `poll_interval` until it returns
/// `Ok(true)` or the timeout expires. A probe error is treated as "not yet":
/// DOM queries race page loads and transiently fail, and the next poll will
/// see the settled state.
///
/// # Errors
///
/// Returns [`DriverError::WaitTimeout`] with `description` if the condition
/// never holds within the budget.
pub async fn wait_until<F, Fut>(probe: F, config: WaitConfig, description: &str) -> Result<()>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let start = Instant::now();

    loop {
        if matches!(probe().await, Ok(true)) {
            return Ok(());
        }

        if start.elapsed() >= config.timeout {
            return Err(DriverError::WaitTimeout {
                condition: description.to_string(),
                timeout: config.timeout,
            });
        }

        sleep(config.poll_interval).await;
    }
}

/// Polls a probe that yields an optional value until the value appears.
///
/// Used where the caller needs the observed value, not just the fact that it
/// exists — e.g. waiting for an element's text and returning it.
///
/// # Errors
///
/// Returns [`DriverError::WaitTimeout`] with `description` if no value is
/// produced within the budget.
pub async fn wait_for_value<T, F, Fut>(
    probe: F,
    config: WaitConfig,
    description: &str,
) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let start = Instant::now();

    loop {
        if let Ok(Some(value)) = probe().await {
            return Ok(value);
        }

        if start.elapsed() >= config.timeout {
            return Err(DriverError::WaitTimeout {
                condition: description.to_string(),
                timeout: config.timeout,
            });
        }

        sleep(config.poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn wait_until_succeeds_immediately() {
        let result = wait_until(|| async { Ok(true) }, WaitConfig::default(), "always true").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn wait_until_succeeds_eventually() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let result = wait_until(
            move || {
                let c = counter_clone.clone();
                async move {
                    let count = c.fetch_add(1, Ordering::SeqCst);
                    Ok(count >= 3)
                }
            },
            WaitConfig::with_timeout(Duration::from_secs(5)),
            "counter >= 3",
        )
        .await;

        assert!(result.is_ok());
        assert!(counter.load(Ordering::SeqCst) >= 3);
    }

    #[tokio::test]
    async fn wait_until_times_out() {
        let result = wait_until(
            || async { Ok(false) },
            WaitConfig::new(Duration::from_millis(100), Duration::from_millis(10)),
            "impossible condition",
        )
        .await;

        assert!(matches!(result, Err(DriverError::WaitTimeout { .. })));
    }

    #[tokio::test]
    async fn wait_until_treats_probe_errors_as_not_yet() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let result = wait_until(
            move || {
                let c = counter_clone.clone();
                async move {
                    if c.fetch_add(1, Ordering::SeqCst) < 2 {
                        Err(DriverError::ScriptFailed("transient".into()))
                    } else {
                        Ok(true)
                    }
                }
            },
            WaitConfig::with_timeout(Duration::from_secs(5)),
            "recovers after transient errors",
        )
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn wait_for_value_returns_the_observed_value() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let value = wait_for_value(
            move || {
                let c = counter_clone.clone();
                async move {
                    let count = c.fetch_add(1, Ordering::SeqCst);
                    Ok((count >= 2).then(|| "ready".to_string()))
                }
            },
            WaitConfig::with_timeout(Duration::from_secs(5)),
            "value appears",
        )
        .await
        .expect("value should appear");

        assert_eq!(value, "ready");
    }

    #[tokio::test]
    async fn wait_for_value_times_out_when_nothing_appears() {
        let result: Result<String> = wait_for_value(
            || async { Ok(None) },
            WaitConfig::new(Duration::from_millis(100), Duration::from_millis(10)),
            "never appears",
        )
        .await;

        assert!(matches!(result, Err(DriverError::WaitTimeout { .. })));
    }
}
