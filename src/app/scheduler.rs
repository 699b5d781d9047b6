// Text Monitor - app/scheduler.rs
//
// Polling scheduler: a background thread that asks the UI thread to refresh
// the tracked files once per fixed interval.
//
// Architecture:
//   - `PollingScheduler` lives on the UI thread; `run_scheduler` runs on one
//     background thread that only sleeps and enqueues.
//   - Each tick sends `SchedulerMessage::RefreshRequested` over an mpsc
//     channel, then calls the `wake` callback so the UI runs a frame.
//   - The UI thread drains the channel each frame and performs the refresh
//     itself. The background thread never reads files or touches UI state.
//   - A `pending` flag is set on send and cleared when the UI drains. A tick
//     that finds a hand-off still pending is skipped, so refreshes never
//     queue up behind a stalled UI.
//   - The sleep is sliced so the stop flag (set on drop) is noticed within
//     SCHEDULER_CANCEL_CHECK_INTERVAL_MS.

use crate::core::model::SchedulerMessage;
use crate::util::constants::SCHEDULER_CANCEL_CHECK_INTERVAL_MS;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

/// Lifecycle of the scheduler thread. There is no paused state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Running,
    Stopped,
}

/// Flags shared between the UI-side handle and the timer thread.
struct Shared {
    /// A request has been sent and not yet drained by the UI.
    pending: AtomicBool,
    /// Set on drop; the thread exits at its next check.
    stop: AtomicBool,
    /// Cleared by the thread on exit.
    running: AtomicBool,
}

/// Handle to the background refresh timer.
///
/// Starts running as soon as it is created and keeps running until dropped.
pub struct PollingScheduler {
    rx: mpsc::Receiver<SchedulerMessage>,
    shared: Arc<Shared>,
    interval: Duration,
}

impl PollingScheduler {
    /// Spawn the timer thread.
    ///
    /// `wake` is called on the timer thread right after each request is
    /// enqueued; the GUI passes a closure that requests an egui repaint.
    pub fn start<W>(interval: Duration, wake: W) -> Self
    where
        W: Fn() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let shared = Arc::new(Shared {
            pending: AtomicBool::new(false),
            stop: AtomicBool::new(false),
            running: AtomicBool::new(true),
        });

        let thread_shared = Arc::clone(&shared);
        let spawned = std::thread::Builder::new()
            .name("refresh-timer".to_string())
            .spawn(move || {
                run_scheduler(interval, tx, &thread_shared, wake);
                thread_shared.running.store(false, Ordering::SeqCst);
            });
        if let Err(e) = spawned {
            // Without the timer the manual Refresh button still works.
            tracing::error!(error = %e, "Failed to spawn refresh timer thread");
            shared.running.store(false, Ordering::SeqCst);
        }

        tracing::info!(interval_ms = interval.as_millis() as u64, "Refresh scheduler started");

        Self {
            rx,
            shared,
            interval,
        }
    }

    /// Drain all queued refresh requests without blocking.
    ///
    /// Requests drained together coalesce into one refresh on the caller's
    /// side. Draining re-opens the gate for the next tick.
    pub fn poll_requests(&self) -> Vec<SchedulerMessage> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.rx.try_recv() {
            messages.push(msg);
        }
        if !messages.is_empty() {
            self.shared.pending.store(false, Ordering::SeqCst);
        }
        messages
    }

    pub fn state(&self) -> SchedulerState {
        if self.shared.running.load(Ordering::SeqCst) {
            SchedulerState::Running
        } else {
            SchedulerState::Stopped
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Drop for PollingScheduler {
    fn drop(&mut self) {
        self.shared.stop.store(true, Ordering::SeqCst);
    }
}

/// Timer loop. Returns when stopped or when the UI side of the channel is gone.
fn run_scheduler<W>(
    interval: Duration,
    tx: mpsc::Sender<SchedulerMessage>,
    shared: &Shared,
    wake: W,
) where
    W: Fn(),
{
    let slice = Duration::from_millis(SCHEDULER_CANCEL_CHECK_INTERVAL_MS);
    let mut tick: u64 = 0;

    loop {
        // Interruptible sleep.
        let deadline = Instant::now() + interval;
        loop {
            if shared.stop.load(Ordering::SeqCst) {
                tracing::debug!("Refresh scheduler stopping");
                return;
            }
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            std::thread::sleep(slice.min(deadline - now));
        }

        if shared.pending.swap(true, Ordering::SeqCst) {
            tracing::debug!("Previous refresh hand-off still pending; skipping tick");
            continue;
        }

        tick += 1;
        if tx.send(SchedulerMessage::RefreshRequested { tick }).is_err() {
            // UI channel closed — exit silently.
            return;
        }
        tracing::trace!(tick, "Refresh requested");
        wake();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    /// Poll the scheduler until at least one request arrives or `timeout`
    /// elapses.
    fn wait_for_requests(scheduler: &PollingScheduler, timeout: Duration) -> Vec<SchedulerMessage> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            let msgs = scheduler.poll_requests();
            if !msgs.is_empty() {
                return msgs;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        Vec::new()
    }

    #[test]
    fn test_starts_running_and_delivers_ticks() {
        let wakes = Arc::new(AtomicUsize::new(0));
        let w = Arc::clone(&wakes);
        let scheduler = PollingScheduler::start(Duration::from_millis(20), move || {
            w.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(scheduler.state(), SchedulerState::Running);
        assert_eq!(scheduler.interval(), Duration::from_millis(20));

        let first = wait_for_requests(&scheduler, Duration::from_secs(5));
        assert_eq!(first, vec![SchedulerMessage::RefreshRequested { tick: 1 }]);

        let second = wait_for_requests(&scheduler, Duration::from_secs(5));
        assert_eq!(second, vec![SchedulerMessage::RefreshRequested { tick: 2 }]);
        assert!(wakes.load(Ordering::SeqCst) >= 1);
    }

    #[test]
    fn test_does_not_queue_while_hand_off_pending() {
        let scheduler = PollingScheduler::start(Duration::from_millis(10), || {});

        // Let many intervals pass without draining.
        std::thread::sleep(Duration::from_millis(300));
        let msgs = scheduler.poll_requests();
        assert_eq!(msgs.len(), 1, "only one request may be outstanding: {msgs:?}");
    }

    #[test]
    fn test_thread_stops_after_drop() {
        let wakes = Arc::new(AtomicUsize::new(0));
        let w = Arc::clone(&wakes);
        let scheduler = PollingScheduler::start(Duration::from_millis(10), move || {
            w.fetch_add(1, Ordering::SeqCst);
        });
        assert!(!wait_for_requests(&scheduler, Duration::from_secs(5)).is_empty());
        let shared = Arc::clone(&scheduler.shared);
        drop(scheduler);

        let deadline = Instant::now() + Duration::from_secs(5);
        while shared.running.load(Ordering::SeqCst) && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(!shared.running.load(Ordering::SeqCst), "timer thread should exit");

        let settled = wakes.load(Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(wakes.load(Ordering::SeqCst), settled);
    }
}
