mod question;

pub use question::{AnswerKey, Choice, Question, QuestionKind};

/// Which part of the application currently owns the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// The home / quiz / results flow.
    Session,
    /// Timed-quiz preview with countdown.
    Preview,
    /// Local question and timer editor.
    Settings,
}
