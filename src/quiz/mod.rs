//! Quiz flow: answers, scoring and the session state machine.

mod answers;
mod scoring;
mod session;

pub use answers::{Answer, Answers};
pub use scoring::{PerformanceBand, ResultSummary, is_correct, percentage, score};
pub use session::{Progress, QuizSession, Screen, Transition};
