//! Timed-quiz preview: a countdown that auto-submits at zero.

mod countdown;
mod ticker;

use std::time::Duration;

use log::info;

pub use countdown::{Countdown, CountdownStatus, Submission, SubmitReason};
pub use ticker::Ticker;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// State owned by the preview screen while it is open.
pub struct PreviewState {
    countdown: Countdown,
    ticker: Option<Ticker>,
    question_count: usize,
    submission: Option<Submission>,
}

impl PreviewState {
    /// A paused preview; call [`PreviewState::start_ticking`] to run it.
    pub fn new(seconds: u32, question_count: usize) -> Self {
        let mut state = Self {
            countdown: Countdown::new(seconds),
            ticker: None,
            question_count,
            submission: None,
        };
        if let Some(submission) = state.countdown.expire_if_due() {
            state.record(submission);
        }
        state
    }

    /// Must be called from within a tokio runtime.
    pub fn start_ticking(&mut self, period: Duration) {
        if self.countdown.is_running() && self.ticker.is_none() {
            self.ticker = Some(Ticker::spawn(period));
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.countdown.seconds_remaining()
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn submission(&self) -> Option<Submission> {
        self.submission
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Apply every tick delivered by the ticker since the last poll.
    pub fn poll_ticks(&mut self) -> Option<Submission> {
        let pending = self.ticker.as_mut().map_or(0, Ticker::drain);
        (0..pending).find_map(|_| self.on_tick())
    }

    pub fn on_tick(&mut self) -> Option<Submission> {
        let submission = self.countdown.tick()?;
        self.record(submission);
        Some(submission)
    }

    pub fn submit(&mut self) -> Option<Submission> {
        let submission = self.countdown.submit()?;
        self.record(submission);
        Some(submission)
    }

    fn record(&mut self, submission: Submission) {
        self.ticker = None;
        self.submission = Some(submission);
        info!(
            "preview submitted ({:?}) with {}s remaining",
            submission.reason, submission.seconds_remaining
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_then_tick_submits_once() {
        let mut preview = PreviewState::new(5, 13);

        assert_eq!(preview.submit().map(|s| s.reason), Some(SubmitReason::Manual));
        assert_eq!(preview.on_tick(), None);
        assert_eq!(preview.submit(), None);
        assert_eq!(preview.seconds_remaining(), 5);
        assert_eq!(preview.submission().map(|s| s.reason), Some(SubmitReason::Manual));
    }

    #[test]
    fn test_zero_seconds_submits_on_open() {
        let preview = PreviewState::new(0, 13);
        assert_eq!(preview.submission().map(|s| s.reason), Some(SubmitReason::TimeUp));
    }

    #[tokio::test]
    async fn test_three_second_preview_fires_once_and_stops() {
        let mut preview = PreviewState::new(3, 13);
        preview.start_ticking(Duration::from_millis(5));
        assert!(preview.is_ticking());

        let mut fired = Vec::new();
        for _ in 0..200 {
            tokio::time::sleep(Duration::from_millis(5)).await;
            if let Some(submission) = preview.poll_ticks() {
                fired.push(submission);
            }
            if !preview.is_ticking() {
                break;
            }
        }

        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].reason, SubmitReason::TimeUp);
        assert_eq!(preview.seconds_remaining(), 0);
        assert!(!preview.is_ticking());

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(preview.poll_ticks(), None);
        assert_eq!(preview.seconds_remaining(), 0);
    }

    #[tokio::test]
    async fn test_manual_submit_stops_ticker() {
        let mut preview = PreviewState::new(60, 13);
        preview.start_ticking(Duration::from_millis(5));

        assert!(preview.submit().is_some());
        assert!(!preview.is_ticking());
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(preview.poll_ticks(), None);
        assert_eq!(preview.seconds_remaining(), 60);
    }
}
