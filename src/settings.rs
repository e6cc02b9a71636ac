//! Local question-prompt and timer editor.
//!
//! The editor keeps its own copy of the prompts and timer; nothing here
//! feeds back into the question bank used by the quiz.

use log::{info, warn};
use thiserror::Error;

pub const DEFAULT_TIMER_SECONDS: u32 = 60;

const DEFAULT_PROMPTS: [&str; 13] = [
    "What is HTML stand for?",
    "Which of the following are JavaScript frameworks?",
    "Is CSS used for styling web pages?",
    "What is the primary purpose of Git?",
    "Which of these are popular databases?",
    "Which keyword defines a function in Python?",
    "What does OOP stand for?",
    "Which loop is guaranteed to execute at least once?",
    "Which symbol is used for equality comparison in most languages?",
    "What does IDE stand for?",
    "Which data structures use FIFO and LIFO?",
    "Which keyword is used to create a class in Python?",
    "Which operator is used for logical AND?",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("timer must be a whole number of seconds, got {0:?}")]
    NotANumber(String),
    #[error("timer must be at least 1 second")]
    TooShort,
}

/// Which input has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFocus {
    List,
    Draft,
    Timer,
}

impl SettingsFocus {
    pub fn next(self) -> Self {
        match self {
            SettingsFocus::List => SettingsFocus::Draft,
            SettingsFocus::Draft => SettingsFocus::Timer,
            SettingsFocus::Timer => SettingsFocus::List,
        }
    }
}

pub struct SettingsEditor {
    prompts: Vec<String>,
    draft: String,
    timer_seconds: u32,
    timer_input: String,
    focus: SettingsFocus,
    selected: usize,
    last_error: Option<SettingsError>,
}

impl SettingsEditor {
    pub fn new(prompts: Vec<String>, timer_seconds: u32) -> Self {
        Self {
            prompts,
            draft: String::new(),
            timer_seconds,
            timer_input: timer_seconds.to_string(),
            focus: SettingsFocus::List,
            selected: 0,
            last_error: None,
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn timer_seconds(&self) -> u32 {
        self.timer_seconds
    }

    pub fn timer_input(&self) -> &str {
        &self.timer_input
    }

    pub fn focus(&self) -> SettingsFocus {
        self.focus
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn last_error(&self) -> Option<&SettingsError> {
        self.last_error.as_ref()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Append the draft as a new prompt.
    ///
    /// Blank drafts are rejected and kept; otherwise the text is stored
    /// exactly as typed and the draft is cleared.
    pub fn add_question(&mut self) -> bool {
        if self.draft.trim().is_empty() {
            return false;
        }
        let prompt = std::mem::take(&mut self.draft);
        info!("settings: added prompt {:?}", prompt);
        self.prompts.push(prompt);
        true
    }

    pub fn delete_question(&mut self, index: usize) -> Option<String> {
        if index >= self.prompts.len() {
            return None;
        }
        let removed = self.prompts.remove(index);
        info!("settings: deleted prompt {:?}", removed);
        self.selected = self.selected.min(self.prompts.len().saturating_sub(1));
        Some(removed)
    }

    /// Parse `value` as the timer length in seconds.
    ///
    /// Invalid input leaves the previous value in place.
    pub fn set_timer_seconds(&mut self, value: &str) -> Result<u32, SettingsError> {
        let trimmed = value.trim();
        let seconds = trimmed
            .parse::<u32>()
            .map_err(|_| SettingsError::NotANumber(trimmed.to_string()))?;
        if seconds == 0 {
            return Err(SettingsError::TooShort);
        }
        self.timer_seconds = seconds;
        info!("settings: timer set to {}s", seconds);
        Ok(seconds)
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn select_next(&mut self) {
        if !self.prompts.is_empty() {
            self.selected = (self.selected + 1) % self.prompts.len();
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.prompts.len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn delete_selected(&mut self) -> Option<String> {
        self.delete_question(self.selected)
    }

    /// Type a character into the focused input.
    pub fn input_push(&mut self, c: char) {
        match self.focus {
            SettingsFocus::Draft => self.draft.push(c),
            SettingsFocus::Timer => {
                self.timer_input.push(c);
                self.last_error = None;
            }
            SettingsFocus::List => {}
        }
    }

    pub fn input_pop(&mut self) {
        match self.focus {
            SettingsFocus::Draft => {
                self.draft.pop();
            }
            SettingsFocus::Timer => {
                self.timer_input.pop();
                self.last_error = None;
            }
            SettingsFocus::List => {}
        }
    }

    /// Commit the focused input: add the draft or apply the timer text.
    pub fn commit(&mut self) {
        match self.focus {
            SettingsFocus::Draft => {
                self.add_question();
            }
            SettingsFocus::Timer => {
                let input = self.timer_input.clone();
                match self.set_timer_seconds(&input) {
                    Ok(_) => self.last_error = None,
                    Err(err) => {
                        warn!("settings: rejected timer input: {}", err);
                        self.last_error = Some(err);
                    }
                }
            }
            SettingsFocus::List => {}
        }
    }
}

impl Default for SettingsEditor {
    fn default() -> Self {
        Self::new(
            DEFAULT_PROMPTS.iter().map(|p| p.to_string()).collect(),
            DEFAULT_TIMER_SECONDS,
        )
    }
}
