use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// How a question accepts answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Exactly one choice.
    #[serde(rename = "multiple-choice")]
    MultipleChoice,
    /// Zero or more choices, scored as a set.
    Checkbox,
    /// Exactly one of two choices.
    TrueFalse,
}

impl QuestionKind {
    pub fn is_multi_select(self) -> bool {
        matches!(self, QuestionKind::Checkbox)
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "○ Multiple Choice",
            QuestionKind::Checkbox => "✓ Multiple Select",
            QuestionKind::TrueFalse => "⊤⊥ True/False",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub key: String,
    pub text: String,
}

/// The correct answer of a question: a single key, or a set of keys for
/// checkbox questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerKey {
    Single(String),
    Multi(BTreeSet<String>),
}

impl AnswerKey {
    pub fn keys(&self) -> Vec<&str> {
        match self {
            AnswerKey::Single(key) => vec![key.as_str()],
            AnswerKey::Multi(keys) => keys.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub choices: Vec<Choice>,
    pub answer: AnswerKey,
}

impl Question {
    pub fn has_choice(&self, key: &str) -> bool {
        self.choices.iter().any(|choice| choice.key == key)
    }

    pub fn choice_key(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(|choice| choice.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_single_and_multi_answers() {
        let json = r#"[
            {"id": "q1", "question": "Pick one", "type": "multiple-choice",
             "choices": [{"key": "A", "text": "a"}, {"key": "B", "text": "b"}],
             "answer": "B"},
            {"id": "q2", "question": "Pick many", "type": "checkbox",
             "choices": [{"key": "A", "text": "a"}, {"key": "B", "text": "b"}],
             "answer": ["B", "A"]},
            {"id": "q3", "question": "Yes?", "type": "truefalse",
             "choices": [{"key": "True", "text": "True"}, {"key": "False", "text": "False"}],
             "answer": "True"}
        ]"#;

        let questions: Vec<Question> = serde_json::from_str(json).unwrap();

        assert_eq!(questions[0].kind, QuestionKind::MultipleChoice);
        assert_eq!(questions[0].answer, AnswerKey::Single("B".to_string()));
        assert_eq!(questions[1].kind, QuestionKind::Checkbox);
        assert_eq!(questions[1].answer.keys(), vec!["A", "B"]);
        assert_eq!(questions[2].kind, QuestionKind::TrueFalse);
    }

    #[test]
    fn test_choice_lookup() {
        let question = Question {
            id: "q".to_string(),
            question: "?".to_string(),
            kind: QuestionKind::MultipleChoice,
            choices: vec![
                Choice {
                    key: "A".to_string(),
                    text: "first".to_string(),
                },
                Choice {
                    key: "B".to_string(),
                    text: "second".to_string(),
                },
            ],
            answer: AnswerKey::Single("A".to_string()),
        };

        assert!(question.has_choice("B"));
        assert!(!question.has_choice("b"));
        assert_eq!(question.choice_key(1), Some("B"));
        assert_eq!(question.choice_key(2), None);
    }
}
