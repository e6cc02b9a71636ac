use std::time::Duration;

use log::info;

use crate::models::{AppState, Question};
use crate::preview::{PreviewState, Submission, TICK_PERIOD};
use crate::quiz::QuizSession;
use crate::settings::{DEFAULT_TIMER_SECONDS, SettingsEditor};

/// Application controller. Owns every piece of screen state; renderers
/// only ever see `&App`.
pub struct App {
    pub state: AppState,
    session: QuizSession,
    preview: Option<PreviewState>,
    settings: SettingsEditor,
    preview_seconds: u32,
    tick_period: Duration,
    result_scroll: usize,
}

impl App {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            state: AppState::Session,
            session: QuizSession::new(questions),
            preview: None,
            settings: SettingsEditor::default(),
            preview_seconds: DEFAULT_TIMER_SECONDS,
            tick_period: TICK_PERIOD,
            result_scroll: 0,
        }
    }

    /// Seconds the timer preview counts down from.
    pub fn with_preview_seconds(mut self, seconds: u32) -> Self {
        self.preview_seconds = seconds;
        self
    }

    #[cfg(test)]
    fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    pub fn preview(&self) -> Option<&PreviewState> {
        self.preview.as_ref()
    }

    pub fn preview_mut(&mut self) -> Option<&mut PreviewState> {
        self.preview.as_mut()
    }

    pub fn settings(&self) -> &SettingsEditor {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsEditor {
        &mut self.settings
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn start_quiz(&mut self) {
        self.result_scroll = 0;
        self.session.start();
    }

    pub fn restart(&mut self) {
        self.result_scroll = 0;
        self.session.retry();
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.session.total_questions().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Open the timer preview. Must be called from within a tokio runtime.
    ///
    /// The preview only shows the bank size captured here; it never reads
    /// or changes the quiz session.
    pub fn open_preview(&mut self) {
        info!("opening timer preview at {}s", self.preview_seconds);
        let mut preview = PreviewState::new(self.preview_seconds, self.session.total_questions());
        preview.start_ticking(self.tick_period);
        self.preview = Some(preview);
        self.state = AppState::Preview;
    }

    /// Drain pending preview ticks. Called once per frame.
    pub fn poll_timer(&mut self) -> Option<Submission> {
        self.preview.as_mut()?.poll_ticks()
    }

    pub fn open_settings(&mut self) {
        self.state = AppState::Settings;
    }

    /// Return to the home screen, tearing down the preview and its ticker.
    pub fn close_side_screen(&mut self) {
        self.preview = None;
        self.state = AppState::Session;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::bundled_questions;
    use crate::preview::SubmitReason;
    use crate::quiz::Screen;

    fn app() -> App {
        App::with_questions(bundled_questions().unwrap())
    }

    #[test]
    fn test_result_scroll_is_bounded() {
        let mut app = app();
        app.scroll_results_up();
        assert_eq!(app.result_scroll(), 0);
        for _ in 0..50 {
            app.scroll_results_down();
        }
        assert_eq!(app.result_scroll(), 12);

        app.start_quiz();
        assert_eq!(app.result_scroll(), 0);
    }

    #[test]
    fn test_settings_do_not_touch_quiz_bank() {
        let mut app = app();
        app.open_settings();
        assert_eq!(app.state, AppState::Settings);
        app.settings_mut().delete_question(0);
        app.settings_mut().delete_question(0);

        app.close_side_screen();
        assert_eq!(app.session().total_questions(), 13);
        assert_eq!(app.settings().prompts().len(), 11);
    }

    #[tokio::test]
    async fn test_preview_open_and_close() {
        let mut app = app().with_preview_seconds(30);
        app.open_preview();
        assert_eq!(app.state, AppState::Preview);

        let preview = app.preview().unwrap();
        assert_eq!(preview.seconds_remaining(), 30);
        assert_eq!(preview.question_count(), 13);
        assert!(preview.is_ticking());

        let submission = app.preview_mut().and_then(PreviewState::submit);
        assert_eq!(submission.map(|s| s.reason), Some(SubmitReason::Manual));

        app.close_side_screen();
        assert!(app.preview().is_none());
        assert_eq!(app.poll_timer(), None);
        assert_eq!(app.session().screen(), Screen::Home);
    }

    #[tokio::test]
    async fn test_leaving_running_preview_stops_ticks() {
        let mut app = app()
            .with_preview_seconds(3)
            .with_tick_period(Duration::from_millis(5));
        app.open_preview();

        let preview = app.preview().unwrap();
        assert!(preview.is_ticking());
        assert_eq!(preview.submission(), None);

        app.close_side_screen();
        assert!(app.preview().is_none());

        // Well past the point where a live countdown would have expired.
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(app.poll_timer(), None);
        assert!(app.preview().is_none());
        assert_eq!(app.state, AppState::Session);

        // Reopening starts a fresh countdown rather than resuming a stale one.
        app.open_preview();
        let preview = app.preview().unwrap();
        assert_eq!(preview.seconds_remaining(), 3);
        assert_eq!(preview.submission(), None);
    }
}
