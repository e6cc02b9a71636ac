/// What ended a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitReason {
    Manual,
    TimeUp,
}

impl SubmitReason {
    pub fn message(self) -> &'static str {
        match self {
            SubmitReason::Manual => "Quiz submitted.",
            SubmitReason::TimeUp => "Time's up! Quiz submitted.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub reason: SubmitReason,
    pub seconds_remaining: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStatus {
    Running,
    Submitted(SubmitReason),
}

/// One-second countdown that submits exactly once.
///
/// Whichever comes first of a manual submit or the count reaching zero
/// wins; everything after that is ignored.
#[derive(Debug, Clone)]
pub struct Countdown {
    seconds_remaining: u32,
    status: CountdownStatus,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            seconds_remaining: seconds,
            status: CountdownStatus::Running,
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn status(&self) -> CountdownStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == CountdownStatus::Running
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> Option<Submission> {
        if !self.is_running() {
            return None;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        self.expire_if_due()
    }

    /// Submit if the count has already reached zero.
    pub fn expire_if_due(&mut self) -> Option<Submission> {
        if self.is_running() && self.seconds_remaining == 0 {
            return Some(self.finish(SubmitReason::TimeUp));
        }
        None
    }

    pub fn submit(&mut self) -> Option<Submission> {
        if !self.is_running() {
            return None;
        }
        Some(self.finish(SubmitReason::Manual))
    }

    fn finish(&mut self, reason: SubmitReason) -> Submission {
        self.status = CountdownStatus::Submitted(reason);
        Submission {
            reason,
            seconds_remaining: self.seconds_remaining,
        }
    }
}
