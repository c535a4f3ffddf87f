//! JavaScript dialog interception.
//!
//! A native `alert`/`confirm`/`prompt` freezes the page until handled, which
//! in a headless run means a hung test. The watcher auto-accepts every
//! dialog as it opens and records what the application raised so tests can
//! assert on it afterwards.
//!
//! Messages live in an `Arc<Mutex<Vec<_>>>` snapshot buffer rather than a
//! channel: tests query the accumulated set repeatedly and arrival order
//! must be preserved, while volumes stay tiny.

use chromiumoxide::cdp::browser_protocol::page::{
    EventJavascriptDialogOpening, HandleJavaScriptDialogParams,
};
use chromiumoxide::page::Page as ChromePage;
use futures::StreamExt;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// One intercepted JavaScript dialog.
#[derive(Debug, Clone)]
pub struct DialogEvent {
    /// The dialog's message text.
    pub message: String,
    /// The dialog kind as reported by the protocol (alert, confirm, ...).
    pub kind: String,
}

/// Thread-safe accumulator of intercepted dialogs for one page.
///
/// Cheaply cloneable; the CDP listener task holds one clone and pushes,
/// tests hold another and query.
#[derive(Debug, Clone, Default)]
pub struct DialogWatcher {
    events: Arc<Mutex<Vec<DialogEvent>>>,
}

impl DialogWatcher {
    /// Starts watching `page`, returning the watcher and its listener task.
    ///
    /// Every dialog is accepted immediately after being recorded.
    pub(crate) fn attach(page: Arc<ChromePage>) -> (Self, JoinHandle<()>) {
        let watcher = Self::default();
        let watcher_clone = watcher.clone();

        let task = tokio::spawn(async move {
            let Ok(mut events) = page.event_listener::<EventJavascriptDialogOpening>().await
            else {
                warn!("could not subscribe to dialog events");
                return;
            };

            while let Some(event) = events.next().await {
                debug!("accepting {:?} dialog: {}", event.r#type, event.message);
                watcher_clone.push(DialogEvent {
                    message: event.message.clone(),
                    kind: format!("{:?}", event.r#type).to_lowercase(),
                });

                if let Err(e) = page.execute(HandleJavaScriptDialogParams::new(true)).await {
                    warn!("failed to accept dialog: {}", e);
                }
            }
        });

        (watcher, task)
    }

    fn push(&self, event: DialogEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
        // A poisoned mutex means a panic is already in flight; losing the
        // record is acceptable for test tooling.
    }

    /// Snapshot of all intercepted dialogs, in arrival order.
    #[must_use]
    pub fn events(&self) -> Vec<DialogEvent> {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Number of dialogs intercepted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// True if no dialog has been intercepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the recorded dialogs.
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watcher_accumulates_in_order() {
        let watcher = DialogWatcher::default();

        watcher.push(DialogEvent {
            message: "first".into(),
            kind: "alert".into(),
        });
        watcher.push(DialogEvent {
            message: "second".into(),
            kind: "confirm".into(),
        });

        let events = watcher.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message, "first");
        assert_eq!(events[1].kind, "confirm");
    }

    #[test]
    fn watcher_clear_empties_the_buffer() {
        let watcher = DialogWatcher::default();
        watcher.push(DialogEvent {
            message: "gone".into(),
            kind: "alert".into(),
        });
        assert!(!watcher.is_empty());

        watcher.clear();
        assert!(watcher.is_empty());
        assert_eq!(watcher.len(), 0);
    }
}
