//! Recurring tick source for the play timer
//!
//! A [`Ticker`] is a background thread that sends one message per
//! interval over an mpsc channel. The owner starts it exactly when play
//! begins and cancels it on every exit from play; cancellation stores a
//! stop flag and forgets the handle, so no recurring process outlives
//! its session. Dropping the ticker cancels it, which also covers
//! teardown.
//!
//! The game itself never sees this type: it counts discrete
//! [`crate::app::controller::Game::tick`] calls, so tests simulate time
//! without waiting on it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use log::debug;

/// Marker message for one elapsed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Handle to a running tick thread.
pub struct Ticker {
    stop: Arc<AtomicBool>,
}

impl Ticker {
    /// Spawns a thread sending [`Tick`] on the channel every interval
    /// until cancelled or the receiver goes away.
    pub fn spawn(interval: Duration, sender: Sender<Tick>) -> Ticker {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        thread::spawn(move || {
            loop {
                thread::sleep(interval);
                if flag.load(Ordering::Relaxed) {
                    break;
                }
                if sender.send(Tick).is_err() {
                    break;
                }
            }
            debug!("tick thread exited");
        });

        Ticker { stop }
    }

    /// Stops the recurring process. The thread observes the flag at its
    /// next wakeup and exits; the handle is forgotten rather than
    /// joined, so cancellation never blocks the caller.
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    const SHORT: Duration = Duration::from_millis(5);

    #[test]
    fn ticker_delivers_ticks() {
        let (tx, rx) = mpsc::channel();
        let _ticker = Ticker::spawn(SHORT, tx);

        assert_eq!(rx.recv_timeout(Duration::from_secs(2)), Ok(Tick));
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)), Ok(Tick));
    }

    #[test]
    fn cancel_stops_the_stream() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::spawn(SHORT, tx);
        let _ = rx.recv_timeout(Duration::from_secs(2));

        ticker.cancel();
        // Let the thread observe the flag, then drain what was already
        // in flight; afterwards the channel must stay silent.
        thread::sleep(SHORT * 4);
        while rx.try_recv().is_ok() {}
        thread::sleep(SHORT * 4);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn drop_cancels() {
        let (tx, rx) = mpsc::channel();
        {
            let _ticker = Ticker::spawn(SHORT, tx);
            let _ = rx.recv_timeout(Duration::from_secs(2));
        }
        thread::sleep(SHORT * 4);
        while rx.try_recv().is_ok() {}
        thread::sleep(SHORT * 4);
        assert!(rx.try_recv().is_err());
    }
}
