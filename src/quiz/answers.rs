use std::collections::{BTreeSet, HashMap};

use crate::models::Question;

/// A user's response to a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Single(String),
    Multi(BTreeSet<String>),
}

/// Responses for the running session, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    by_question: HashMap<String, Answer>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.by_question.get(question_id)
    }

    pub fn len(&self) -> usize {
        self.by_question.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_question.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_question.clear();
    }

    /// Record `choice_key` for `question`.
    ///
    /// Checkbox questions toggle the key in and out of the stored set; an
    /// emptied set removes the entry so that selecting the same key twice
    /// restores the previous state exactly. Every other kind replaces the
    /// stored value.
    pub fn select(&mut self, question: &Question, choice_key: &str) {
        if !question.kind.is_multi_select() {
            self.by_question
                .insert(question.id.clone(), Answer::Single(choice_key.to_string()));
            return;
        }

        let mut keys = match self.by_question.remove(&question.id) {
            Some(Answer::Multi(keys)) => keys,
            _ => BTreeSet::new(),
        };

        if !keys.remove(choice_key) {
            keys.insert(choice_key.to_string());
        }

        if !keys.is_empty() {
            self.by_question.insert(question.id.clone(), Answer::Multi(keys));
        }
    }

    pub fn is_selected(&self, question_id: &str, choice_key: &str) -> bool {
        match self.get(question_id) {
            Some(Answer::Single(key)) => key == choice_key,
            Some(Answer::Multi(keys)) => keys.contains(choice_key),
            None => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn insert_raw(&mut self, question_id: &str, answer: Answer) {
        self.by_question.insert(question_id.to_string(), answer);
    }
}
