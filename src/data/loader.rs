use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::models::{AnswerKey, Question, QuestionKind};

const BUNDLED_QUESTIONS: &str = include_str!("../../questions.json");

/// Why a question bank could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse questions: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question bank must contain at least one question")]
    Empty,
    #[error("question id {0:?} appears more than once")]
    DuplicateId(String),
    #[error("question {question:?} lists choice {key:?} more than once")]
    DuplicateChoice { question: String, key: String },
    #[error("question {question:?} answer refers to unknown choice {key:?}")]
    UnknownAnswerKey { question: String, key: String },
    #[error("question {0:?} answer does not match its type")]
    AnswerShape(String),
}

/// The question bank compiled into the binary.
pub fn bundled_questions() -> Result<Vec<Question>, LoadError> {
    parse_questions(BUNDLED_QUESTIONS)
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse_questions(&json_content)?;
    info!("loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

/// Parse and validate a JSON question bank.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;

    if questions.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut ids = HashSet::new();
    for question in &questions {
        if !ids.insert(question.id.as_str()) {
            return Err(LoadError::DuplicateId(question.id.clone()));
        }
        validate_question(question)?;
    }

    Ok(questions)
}

fn validate_question(question: &Question) -> Result<(), LoadError> {
    let mut keys = HashSet::new();
    for choice in &question.choices {
        if !keys.insert(choice.key.as_str()) {
            return Err(LoadError::DuplicateChoice {
                question: question.id.clone(),
                key: choice.key.clone(),
            });
        }
    }

    let shape_ok = match (&question.answer, question.kind) {
        (AnswerKey::Multi(set), QuestionKind::Checkbox) => !set.is_empty(),
        (AnswerKey::Single(_), QuestionKind::MultipleChoice | QuestionKind::TrueFalse) => true,
        _ => false,
    };
    if !shape_ok {
        return Err(LoadError::AnswerShape(question.id.clone()));
    }

    if let Some(key) = question.answer.keys().into_iter().find(|key| !keys.contains(key)) {
        return Err(LoadError::UnknownAnswerKey {
            question: question.id.clone(),
            key: key.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn single(id: &str, answer: &str) -> String {
        format!(
            r#"{{"id": "{id}", "question": "?", "type": "multiple-choice",
                "choices": [{{"key": "A", "text": "a"}}, {{"key": "B", "text": "b"}}],
                "answer": "{answer}"}}"#
        )
    }

    #[test]
    fn test_bundled_bank_is_valid() {
        let questions = bundled_questions().unwrap();
        assert_eq!(questions.len(), 13);
        assert!(questions.iter().any(|q| q.kind == QuestionKind::Checkbox));
        assert!(questions.iter().any(|q| q.kind == QuestionKind::TrueFalse));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{}]", single("q1", "A")).unwrap();

        let questions = load_questions_from_json(file.path()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, "q1");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_questions_from_json(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_rejects_empty_bank() {
        assert!(matches!(parse_questions("[]"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(parse_questions("{"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = format!("[{}, {}]", single("q1", "A"), single("q1", "B"));
        assert!(matches!(
            parse_questions(&json),
            Err(LoadError::DuplicateId(id)) if id == "q1"
        ));
    }

    #[test]
    fn test_rejects_unknown_answer_key() {
        let json = format!("[{}]", single("q1", "Z"));
        assert!(matches!(
            parse_questions(&json),
            Err(LoadError::UnknownAnswerKey { key, .. }) if key == "Z"
        ));
    }

    #[test]
    fn test_rejects_mismatched_answer_shape() {
        let json = r#"[{"id": "q1", "question": "?", "type": "checkbox",
            "choices": [{"key": "A", "text": "a"}], "answer": "A"}]"#;
        assert!(matches!(parse_questions(json), Err(LoadError::AnswerShape(_))));

        let json = r#"[{"id": "q1", "question": "?", "type": "checkbox",
            "choices": [{"key": "A", "text": "a"}], "answer": []}]"#;
        assert!(matches!(parse_questions(json), Err(LoadError::AnswerShape(_))));
    }

    #[test]
    fn test_rejects_duplicate_choice_keys() {
        let json = r#"[{"id": "q1", "question": "?", "type": "truefalse",
            "choices": [{"key": "True", "text": "t"}, {"key": "True", "text": "t"}],
            "answer": "True"}]"#;
        assert!(matches!(
            parse_questions(json),
            Err(LoadError::DuplicateChoice { .. })
        ));
    }
}
