//! Home → Quiz → Results state machine.

use log::{debug, info};

use crate::models::Question;

use super::answers::Answers;
use super::scoring::{self, ResultSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Quiz,
    Results,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced,
    Finished { score: usize },
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
    pub percent: u32,
}

impl Progress {
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.current as f64 / self.total as f64
        }
    }
}

pub struct QuizSession {
    questions: Vec<Question>,
    screen: Screen,
    current_index: usize,
    highlighted: usize,
    answers: Answers,
    score: usize,
    high_score: usize,
}

impl QuizSession {
    /// `questions` must be non-empty; the loader guarantees it.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            screen: Screen::Home,
            current_index: 0,
            highlighted: 0,
            answers: Answers::new(),
            score: 0,
            high_score: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn is_first_question(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn high_score(&self) -> usize {
        self.high_score
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn progress(&self) -> Progress {
        let total = self.questions.len();
        let current = (self.current_index + 1).min(total);
        Progress {
            current,
            total,
            percent: scoring::percentage(current, total),
        }
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::new(self.score, self.questions.len(), self.high_score)
    }

    /// Begin a fresh attempt. Valid from the home and results screens.
    pub fn start(&mut self) -> Transition {
        if self.screen == Screen::Quiz {
            return Transition::Ignored;
        }

        self.screen = Screen::Quiz;
        self.current_index = 0;
        self.highlighted = 0;
        self.answers.clear();
        self.score = 0;
        info!("quiz started with {} questions", self.questions.len());
        Transition::Advanced
    }

    pub fn retry(&mut self) -> Transition {
        if self.screen != Screen::Results {
            return Transition::Ignored;
        }
        self.start()
    }

    /// Leave the results screen without starting another attempt.
    pub fn go_home(&mut self) -> Transition {
        if self.screen != Screen::Results {
            return Transition::Ignored;
        }
        self.screen = Screen::Home;
        Transition::Advanced
    }

    pub fn next(&mut self) -> Transition {
        if self.screen != Screen::Quiz {
            return Transition::Ignored;
        }

        if !self.is_last_question() {
            self.current_index += 1;
            self.highlighted = 0;
            return Transition::Advanced;
        }

        self.finish()
    }

    pub fn previous(&mut self) -> Transition {
        if self.screen != Screen::Quiz || self.current_index == 0 {
            return Transition::Ignored;
        }
        self.current_index -= 1;
        self.highlighted = 0;
        Transition::Advanced
    }

    fn finish(&mut self) -> Transition {
        let score = scoring::score(&self.questions, &self.answers);
        self.score = score;
        if score > self.high_score {
            info!("new high score {} (was {})", score, self.high_score);
            self.high_score = score;
        }
        self.screen = Screen::Results;
        info!("quiz finished: {}/{}", score, self.questions.len());
        Transition::Finished { score }
    }

    /// Record `choice_key` for the question with `question_id`.
    pub fn select_answer(&mut self, question_id: &str, choice_key: &str) {
        if let Some(question) = self.questions.iter().find(|q| q.id == question_id) {
            debug!("question {} selected {}", question_id, choice_key);
            self.answers.select(question, choice_key);
        }
    }

    /// Select (or toggle) the highlighted choice of the current question.
    pub fn select_highlighted(&mut self) {
        if self.screen != Screen::Quiz {
            return;
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return;
        };
        if let Some(key) = question.choice_key(self.highlighted) {
            debug!("question {} selected {}", question.id, key);
            self.answers.select(question, key);
        }
    }

    pub fn is_selected(&self, question_id: &str, choice_key: &str) -> bool {
        self.answers.is_selected(question_id, choice_key)
    }

    pub fn highlight_next(&mut self) {
        let count = self.choice_count();
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    pub fn highlight_previous(&mut self) {
        let count = self.choice_count();
        if count > 0 {
            self.highlighted = (self.highlighted + count - 1) % count;
        }
    }

    fn choice_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.choices.len())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::models::{AnswerKey, Choice, QuestionKind};

    fn bank(count: usize) -> Vec<Question> {
        (1..=count)
            .map(|n| Question {
                id: n.to_string(),
                question: format!("Question {}", n),
                kind: QuestionKind::MultipleChoice,
                choices: ["A", "B", "C", "D"]
                    .iter()
                    .map(|key| Choice {
                        key: key.to_string(),
                        text: key.to_string(),
                    })
                    .collect(),
                answer: AnswerKey::Single("A".to_string()),
            })
            .collect()
    }

    /// Answers every question, `correct` of them right, and finishes.
    fn play(session: &mut QuizSession, correct: usize) -> Transition {
        session.start();
        let total = session.total_questions();
        for index in 0..total {
            let id = (index + 1).to_string();
            let key = if index < correct { "A" } else { "B" };
            session.select_answer(&id, key);
            let transition = session.next();
            if index + 1 == total {
                return transition;
            }
        }
        Transition::Ignored
    }

    #[test]
    fn test_starts_at_home() {
        let session = QuizSession::new(bank(3));
        assert_eq!(session.screen(), Screen::Home);
        assert_eq!(session.high_score(), 0);
    }

    #[test]
    fn test_previous_is_guarded_at_first_question() {
        let mut session = QuizSession::new(bank(3));
        session.start();

        assert_eq!(session.previous(), Transition::Ignored);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.screen(), Screen::Quiz);

        session.next();
        assert_eq!(session.previous(), Transition::Advanced);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_next_on_last_question_finishes() {
        let mut session = QuizSession::new(bank(2));
        session.start();

        assert_eq!(session.next(), Transition::Advanced);
        assert_eq!(session.current_index(), 1);
        assert!(session.is_last_question());

        assert_eq!(session.next(), Transition::Finished { score: 0 });
        assert_eq!(session.screen(), Screen::Results);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.next(), Transition::Ignored);
    }

    #[test]
    fn test_thirteen_question_scenario() {
        let mut session = QuizSession::new(bank(13));

        assert_eq!(play(&mut session, 10), Transition::Finished { score: 10 });
        assert_eq!(session.score(), 10);
        assert_eq!(session.high_score(), 10);
        assert!(session.summary().is_new_high);

        session.retry();
        assert_eq!(session.screen(), Screen::Quiz);
        assert_eq!(session.score(), 0);
        assert!(session.answers().is_empty());

        assert_eq!(play(&mut session, 7), Transition::Finished { score: 7 });
        assert_eq!(session.high_score(), 10);
        assert!(!session.summary().is_new_high);
    }

    #[test]
    fn test_high_score_is_running_max() {
        let mut session = QuizSession::new(bank(5));
        let mut best = 0;
        for correct in [2, 4, 1, 5, 3] {
            play(&mut session, correct);
            best = best.max(correct);
            assert_eq!(session.high_score(), best);
        }
    }

    #[test]
    fn test_start_resets_session() {
        let mut session = QuizSession::new(bank(3));
        session.start();
        session.select_answer("1", "C");
        session.next();
        session.next();
        session.next();
        assert_eq!(session.screen(), Screen::Results);

        session.go_home();
        assert_eq!(session.screen(), Screen::Home);
        session.start();
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_start_ignored_mid_quiz() {
        let mut session = QuizSession::new(bank(3));
        session.start();
        session.next();
        assert_eq!(session.start(), Transition::Ignored);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_highlight_wraps_and_selects() {
        let mut session = QuizSession::new(bank(1));
        session.start();

        session.highlight_previous();
        assert_eq!(session.highlighted(), 3);
        session.highlight_next();
        assert_eq!(session.highlighted(), 0);
        session.highlight_next();
        session.select_highlighted();
        assert!(session.is_selected("1", "B"));
    }

    #[test]
    fn test_progress() {
        let mut session = QuizSession::new(bank(4));
        session.start();
        session.next();

        let progress = session.progress();
        assert_eq!(progress.current, 2);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.percent, 50);
        assert!((progress.ratio() - 0.5).abs() < f64::EPSILON);
    }

    proptest! {
        /// After any run of sessions the best score is the max seen so far.
        #[test]
        fn high_score_tracks_running_max(results in prop::collection::vec(0usize..=6, 1..8)) {
            let mut session = QuizSession::new(bank(6));
            let mut best = 0;
            for correct in results {
                let transition = play(&mut session, correct);
                prop_assert_eq!(transition, Transition::Finished { score: correct });
                prop_assert_eq!(session.screen(), Screen::Results);

                best = best.max(correct);
                prop_assert_eq!(session.score(), correct);
                prop_assert_eq!(session.high_score(), best);
                prop_assert!(session.score() <= session.total_questions());
            }
        }
    }
}
