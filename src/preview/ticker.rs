use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Periodic tick source running on the tokio runtime.
///
/// The background task is aborted when the ticker is cancelled or dropped.
pub struct Ticker {
    receiver: mpsc::UnboundedReceiver<()>,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Start ticking every `period`, first tick one `period` from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(period: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(()).is_err() {
                    break;
                }
            }
        });

        Self { receiver, handle }
    }

    /// Wait for the next tick. `None` once the ticker has stopped.
    #[cfg(test)]
    pub(crate) async fn next(&mut self) -> Option<()> {
        self.receiver.recv().await
    }

    /// Number of ticks that arrived since the last call, without waiting.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while self.receiver.try_recv().is_ok() {
            count += 1;
        }
        count
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
