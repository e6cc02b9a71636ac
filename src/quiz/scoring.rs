//! Answer-key comparison and result reporting.

use crate::models::{AnswerKey, Question};

use super::answers::{Answer, Answers};

/// Whether `answer` matches the key of `question`.
///
/// Missing answers and answers whose shape does not match the question
/// type are incorrect.
pub fn is_correct(question: &Question, answer: Option<&Answer>) -> bool {
    match (&question.answer, answer) {
        (AnswerKey::Multi(expected), Some(Answer::Multi(given))) => {
            given.len() == expected.len() && given.iter().all(|key| expected.contains(key))
        }
        (AnswerKey::Single(expected), Some(Answer::Single(given))) => given == expected,
        _ => false,
    }
}

/// Number of correctly answered questions.
pub fn score(questions: &[Question], answers: &Answers) -> usize {
    questions
        .iter()
        .filter(|question| is_correct(question, answers.get(&question.id)))
        .count()
}

/// Rounded percentage, 0 for an empty quiz.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceBand {
    Perfect,
    Excellent,
    Good,
    Fair,
    KeepTrying,
}

impl PerformanceBand {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100..=u32::MAX => PerformanceBand::Perfect,
            80..=99 => PerformanceBand::Excellent,
            60..=79 => PerformanceBand::Good,
            40..=59 => PerformanceBand::Fair,
            _ => PerformanceBand::KeepTrying,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PerformanceBand::Perfect => "Perfect! You're a quiz master!",
            PerformanceBand::Excellent => "Excellent work! Keep it up!",
            PerformanceBand::Good => "Good job! You're doing great!",
            PerformanceBand::Fair => "Not bad! Practice makes perfect!",
            PerformanceBand::KeepTrying => "Keep trying! You'll do better next time!",
        }
    }
}

/// Everything the results screen shows about a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub high_score: usize,
    pub is_new_high: bool,
}

impl ResultSummary {
    pub fn new(score: usize, total: usize, high_score: usize) -> Self {
        Self {
            score,
            total,
            percentage: percentage(score, total),
            high_score,
            is_new_high: score == high_score && score > 0,
        }
    }

    pub fn band(&self) -> PerformanceBand {
        PerformanceBand::from_percentage(self.percentage)
    }
}
