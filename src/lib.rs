//! # pocket-quiz
//!
//! A terminal quiz: multiple-choice, multi-select and true/false questions,
//! scored against an answer key, with an in-process best score. Also ships
//! a countdown timer preview and a local question editor.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pocket_quiz::{Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Load questions from a JSON file
//!     let quiz = Quiz::from_json("questions.json")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
pub mod logging;
mod models;
pub mod preview;
pub mod quiz;
pub mod settings;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{debug, info};
use thiserror::Error;

pub use app::App;
pub use data::{LoadError, bundled_questions, load_questions_from_json, parse_questions};
pub use models::{AnswerKey, AppState, Choice, Question, QuestionKind};

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// A quiz over the question bank compiled into the binary.
    pub fn bundled() -> Result<Self, QuizError> {
        Ok(Self::new(bundled_questions()?))
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use pocket_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Ok(Self::new(questions))
    }

    /// Seconds the timer preview counts down from.
    pub fn with_preview_seconds(mut self, seconds: u32) -> Self {
        self.app = self.app.with_preview_seconds(seconds);
        self
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits. Must run inside a tokio runtime, which drives
    /// the timer preview.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        info!("terminal ready, entering event loop");
        let result = run_event_loop(guard.terminal(), &mut self.app);
        info!("leaving event loop");
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        app.poll_timer();
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(INPUT_POLL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
pub fn handle_input(app: &mut App, key: KeyCode) -> bool {
    debug!("key {:?} in {:?}", key, app.state);
    match app.state {
        AppState::Session => match app.session().screen() {
            quiz::Screen::Home => handle_home_input(app, key),
            quiz::Screen::Quiz => handle_quiz_input(app, key),
            quiz::Screen::Results => handle_result_input(app, key),
        },
        AppState::Preview => handle_preview_input(app, key),
        AppState::Settings => handle_settings_input(app, key),
    }
}

fn handle_home_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.open_preview();
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.open_settings();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    let session = app.session_mut();
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            session.highlight_previous();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            session.highlight_next();
            false
        }
        KeyCode::Char(' ') => {
            session.select_highlighted();
            false
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => {
            session.next();
            false
        }
        KeyCode::Left | KeyCode::Char('h') => {
            session.previous();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('h') | KeyCode::Char('H') => {
            app.session_mut().go_home();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_preview_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(preview) = app.preview_mut() {
                preview.submit();
            }
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => app.close_side_screen(),
        _ => {}
    }
    false
}

fn handle_settings_input(app: &mut App, key: KeyCode) -> bool {
    use settings::SettingsFocus;

    if key == KeyCode::Esc {
        app.close_side_screen();
        return false;
    }

    let editor = app.settings_mut();
    match (editor.focus(), key) {
        (_, KeyCode::Tab) => editor.cycle_focus(),
        (SettingsFocus::List, KeyCode::Down | KeyCode::Char('j')) => editor.select_next(),
        (SettingsFocus::List, KeyCode::Up | KeyCode::Char('k')) => editor.select_previous(),
        (SettingsFocus::List, KeyCode::Delete | KeyCode::Char('d')) => {
            editor.delete_selected();
        }
        (SettingsFocus::List, KeyCode::Char('q')) => app.close_side_screen(),
        (SettingsFocus::Draft | SettingsFocus::Timer, KeyCode::Char(c)) => editor.input_push(c),
        (SettingsFocus::Draft | SettingsFocus::Timer, KeyCode::Backspace) => editor.input_pop(),
        (SettingsFocus::Draft | SettingsFocus::Timer, KeyCode::Enter) => editor.commit(),
        _ => {}
    }
    false
}
