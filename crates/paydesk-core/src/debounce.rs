//! Debounced input handling
//!
//! Decouples keystroke-rate input from the filter pipeline: a submitted
//! value only becomes effective after the delay elapses uninterrupted, and
//! a newer submission aborts the pending one. At most one timer is live at
//! a time, and dropping the debouncer aborts any outstanding timer so no
//! stale update fires after teardown.
//!
//! In the rendered pages the same settle behavior runs browser-side as an
//! HTMX `delay:450ms` trigger (see the dashboard search box), matching
//! [`SEARCH_DEBOUNCE`]. This type is the in-process equivalent for callers
//! driving the query pipeline directly.

use log::trace;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Fixed delay applied to the dashboard search box
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(450);

/// Delays delivery of the latest submitted value until input settles
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer and the receiver its settled values arrive on
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Submit a new value, cancelling any value still waiting on its timer
    pub fn submit(&mut self, value: T) {
        if let Some(handle) = self.pending.take() {
            trace!("debounce: aborting pending timer");
            handle.abort();
        }
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver may already be gone during teardown
            let _ = tx.send(value);
        }));
    }

    /// Cancel the pending value, if any, without submitting a new one
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_only_final_value_fires() {
        let (mut debouncer, mut rx) = Debouncer::new(SEARCH_DEBOUNCE);
        debouncer.submit("s".to_string());
        debouncer.submit("s1".to_string());
        debouncer.submit("s1 edu".to_string());

        // paused clock auto-advances to the one surviving timer
        assert_eq!(rx.recv().await.unwrap(), "s1 edu");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_submissions_each_fire() {
        let (mut debouncer, mut rx) = Debouncer::new(SEARCH_DEBOUNCE);
        debouncer.submit(1u32);
        assert_eq!(rx.recv().await.unwrap(), 1);
        debouncer.submit(2u32);
        assert_eq!(rx.recv().await.unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_suppresses_delivery() {
        let (mut debouncer, mut rx) = Debouncer::new(SEARCH_DEBOUNCE);
        debouncer.submit("stale".to_string());
        debouncer.cancel();

        tokio::time::advance(SEARCH_DEBOUNCE * 2).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_timer() {
        let (mut debouncer, mut rx) = Debouncer::new(SEARCH_DEBOUNCE);
        debouncer.submit("stale".to_string());
        drop(debouncer);

        tokio::time::advance(SEARCH_DEBOUNCE * 2).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }
}
