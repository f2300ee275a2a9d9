//! Rotating loading messages shown while a request is in flight.

use std::io::Write;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// The fixed message rotation, in display order.
pub const MESSAGES: &[&str] = &[
    "Fetching the latest headlines...",
    "Choosing today's story...",
    "Dreaming up the artwork...",
    "Rendering the image...",
    "Hang tight, the pipeline can take a while...",
];

/// How long each message stays up before the next one.
pub const INTERVAL: Duration = Duration::from_millis(2500);

/// Message for a given tick, wrapping past the end of the list.
pub fn message_at(tick: usize) -> &'static str {
    MESSAGES[tick % MESSAGES.len()]
}

/// Cycles loading messages in a background task until stopped.
///
/// Purely cosmetic: it has no effect on the request it decorates. Every
/// start begins at the first message, and [`LoadingTicker::stop`] must run
/// on every exit path so the timer never outlives its request.
pub struct LoadingTicker {
    handle: JoinHandle<()>,
    cancel: watch::Sender<bool>,
    tick: watch::Receiver<usize>,
}

impl LoadingTicker {
    pub fn start() -> Self {
        Self::with_interval(INTERVAL)
    }

    /// Same as [`LoadingTicker::start`] with a custom interval, so tests
    /// don't have to wait out the real cadence.
    pub fn with_interval(interval: Duration) -> Self {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);
        let (tick_tx, tick_rx) = watch::channel(0usize);

        let handle = tokio::spawn(async move {
            let mut tick = 0usize;
            loop {
                let message = message_at(tick);
                // \r moves to start of line, \x1b[2K clears the line
                eprint!("\x1b[2K\r{message}");
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(interval) => {}
                    _ = cancel_rx.changed() => break,
                }
                tick += 1;
                let _ = tick_tx.send(tick % MESSAGES.len());
            }
            // Clear the message line
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            handle,
            cancel: cancel_tx,
            tick: tick_rx,
        }
    }

    /// The index of the message currently displayed, observable so the
    /// rotation is testable.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.tick.clone()
    }

    /// Stop cycling and clear the line.
    pub async fn stop(self) {
        let _ = self.cancel.send(true);
        let _ = self.handle.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_list_is_fixed_and_non_empty() {
        assert!(!MESSAGES.is_empty());
        for message in MESSAGES {
            assert!(!message.is_empty());
        }
    }

    #[test]
    fn rotation_wraps_to_the_first_message() {
        assert_eq!(message_at(0), MESSAGES[0]);
        assert_eq!(message_at(MESSAGES.len()), MESSAGES[0]);
        assert_eq!(message_at(MESSAGES.len() + 1), MESSAGES[1]);
    }

    #[tokio::test]
    async fn starts_at_the_first_message() {
        let ticker = LoadingTicker::with_interval(Duration::from_secs(60));
        assert_eq!(*ticker.subscribe().borrow(), 0);
        ticker.stop().await;
    }

    #[tokio::test]
    async fn rotation_advances_while_in_flight() {
        let ticker = LoadingTicker::with_interval(Duration::from_millis(10));
        let mut tick = ticker.subscribe();

        tick.changed().await.unwrap();
        let seen = *tick.borrow();
        assert!(seen >= 1);
        assert!(seen < MESSAGES.len());

        ticker.stop().await;
    }

    #[tokio::test]
    async fn each_start_resets_to_the_first_message() {
        let first = LoadingTicker::with_interval(Duration::from_millis(10));
        let mut tick = first.subscribe();
        tick.changed().await.unwrap();
        first.stop().await;

        let second = LoadingTicker::with_interval(Duration::from_millis(10));
        assert_eq!(*second.subscribe().borrow(), 0);
        second.stop().await;
    }

    #[tokio::test]
    async fn immediate_stop_cancels_the_task() {
        let ticker = LoadingTicker::with_interval(Duration::from_millis(10));
        ticker.stop().await;
    }
}
