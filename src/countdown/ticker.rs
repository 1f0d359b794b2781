//! Periodic tick driver for countdown displays
//!
//! The engine itself is pure; this owns the heartbeat that re-runs it.
//! Stopping, dropping, or replacing a ticker cancels its thread, so a
//! display slot never accumulates duplicate timers across re-renders.
//! Callbacks recompute from the wall clock, so there is no cumulative
//! drift to correct.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

/// Default heartbeat between recomputations
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct Ticker {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn a background thread that runs `tick` immediately and then once
    /// per `interval` until stopped
    pub fn start<F>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let handle = std::thread::Builder::new()
            .name("countdown-ticker".to_string())
            .spawn(move || {
                tick();
                loop {
                    match rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => tick(),
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            });

        let handle = match handle {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("Failed to spawn ticker thread: {}", e);
                None
            }
        };

        Self {
            stop: Some(tx),
            handle,
        }
    }

    /// Stop the tick loop and wait for the thread to exit; idempotent
    pub fn stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_first_tick_is_immediate() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let mut ticker = Ticker::start(Duration::from_secs(60), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        ticker.stop();
    }

    #[test]
    fn test_ticks_repeat_until_stopped() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let mut ticker = Ticker::start(Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        std::thread::sleep(Duration::from_millis(100));
        ticker.stop();
        let after_stop = count.load(Ordering::SeqCst);
        assert!(after_stop >= 3, "expected several ticks, got {}", after_stop);

        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut ticker = Ticker::start(Duration::from_millis(10), || {});
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_replacing_ticker_cancels_previous() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        // The slot pattern: replacing the ticker drops (and stops) the old one
        let mut slot = Some(Ticker::start(Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        std::thread::sleep(Duration::from_millis(40));
        assert!(count.load(Ordering::SeqCst) >= 1);

        slot.replace(Ticker::start(Duration::from_secs(60), || {}));
        let frozen = count.load(Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), frozen);
        slot.take();
    }
}
