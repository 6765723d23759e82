//! Dashboard state and the refresh cycle it drives.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::data::Assessment;
use crate::pipeline::run_cycle;
use crate::report::plain;
use crate::schedule::RefreshSchedule;
use crate::source::FeedSource;
use crate::ui::Theme;

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Data source
    source: Box<dyn FeedSource>,
    /// Latest successful cycle; replaced wholesale by the next one.
    pub assessment: Option<Assessment>,
    /// Failure of the most recent cycle, shown as a dialog until dismissed.
    pub error: Option<String>,
    pub schedule: RefreshSchedule,

    // Text pane scroll offset (lines)
    pub scroll: u16,

    /// Screen area of the fetch button, recorded at render time.
    pub fetch_button: Option<Rect>,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App fetching from `source` every `refresh_interval`.
    ///
    /// The first refresh is due immediately.
    pub fn new(source: Box<dyn FeedSource>, refresh_interval: Duration, theme: Theme) -> Self {
        Self {
            running: true,
            show_help: false,
            source,
            assessment: None,
            error: None,
            schedule: RefreshSchedule::start(refresh_interval, Instant::now()),
            scroll: 0,
            fetch_button: None,
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the current feed source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Run one fetch cycle.
    ///
    /// On success the new assessment replaces the old one and any error is
    /// cleared. On failure the previous assessment stays on screen and the
    /// error is surfaced. Returns whether the cycle succeeded.
    pub fn refresh(&mut self) -> bool {
        match run_cycle(self.source.as_mut()) {
            Ok(assessment) => {
                self.assessment = Some(assessment);
                self.error = None;
                self.clamp_scroll();
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// Run a scheduled refresh if one is due at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.schedule.take_due(now) {
            self.refresh();
            true
        } else {
            false
        }
    }

    /// Manual fetch (button or key). Leaves the schedule untouched.
    pub fn manual_fetch(&mut self) {
        if self.refresh() {
            self.set_status_message("Fetched solar data".to_string());
        }
    }

    /// Lines of the text pane. The heading is the pane title, not a line.
    pub fn text_lines(&self) -> Vec<String> {
        match &self.assessment {
            Some(a) => plain::rows(&a.snapshot),
            None => Vec::new(),
        }
    }

    fn max_scroll(&self) -> u16 {
        let lines = self.text_lines().len();
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_down(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_add(n).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    pub fn scroll_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Whether `(column, row)` falls on the fetch button.
    pub fn hits_fetch_button(&self, column: u16, row: u16) -> bool {
        self.fetch_button.is_some_and(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
    }

    /// Close the error dialog.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit and cancel scheduled refreshes.
    pub fn quit(&mut self) {
        self.running = false;
        self.schedule.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FetchError, StaticSource};

    const SAMPLE: &str = "<solar><solarflux>120.5</solarflux><kindex>2</kindex></solar>";

    fn app_with(source: StaticSource) -> App {
        App::new(Box::new(source), Duration::from_secs(7_200), Theme::dark())
    }

    #[test]
    fn test_first_tick_fetches() {
        let mut app = app_with(StaticSource::new(SAMPLE));
        assert!(app.assessment.is_none());

        assert!(app.tick(Instant::now()));
        let assessment = app.assessment.as_ref().unwrap();
        assert_eq!(assessment.conditions.len(), 2);

        // Next tick is two hours away
        assert!(!app.tick(Instant::now()));
    }

    #[test]
    fn test_failure_keeps_previous_assessment() {
        let mut app = app_with(StaticSource::new(SAMPLE));
        assert!(app.refresh());

        app.source = Box::new(StaticSource::failing(FetchError::Status(503)));
        assert!(!app.refresh());

        assert!(app.assessment.is_some());
        assert_eq!(
            app.error.as_deref(),
            Some("Failed to fetch data. Status code: 503")
        );
    }

    #[test]
    fn test_success_clears_error() {
        let mut app = app_with(StaticSource::failing(FetchError::Timeout));
        app.refresh();
        assert!(app.error.is_some());
        assert!(app.assessment.is_none());

        app.source = Box::new(StaticSource::new(SAMPLE));
        app.manual_fetch();
        assert!(app.error.is_none());
        assert_eq!(app.get_status_message(), Some("Fetched solar data"));
    }

    #[test]
    fn test_manual_fetch_keeps_schedule() {
        let mut app = app_with(StaticSource::new(SAMPLE));
        let now = Instant::now();
        app.tick(now);
        let before = app.schedule.remaining(now);

        app.manual_fetch();
        assert_eq!(app.schedule.remaining(now), before);
    }

    #[test]
    fn test_quit_cancels_schedule() {
        let mut app = app_with(StaticSource::new(SAMPLE));
        app.quit();

        assert!(!app.running);
        assert!(app.schedule.is_cancelled());
        assert!(!app.tick(Instant::now() + Duration::from_secs(10_000)));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = app_with(StaticSource::new(SAMPLE));
        app.refresh();
        let total = app.text_lines().len() as u16;
        assert_eq!(total, 20);

        app.scroll_down(1_000);
        assert_eq!(app.scroll, total - 1);
        app.scroll_up(5);
        assert_eq!(app.scroll, total - 6);
        app.scroll_top();
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_fetch_button_hit_test() {
        let mut app = app_with(StaticSource::new(SAMPLE));
        assert!(!app.hits_fetch_button(0, 0));

        app.fetch_button = Some(Rect::new(10, 20, 22, 3));
        assert!(app.hits_fetch_button(10, 20));
        assert!(app.hits_fetch_button(31, 22));
        assert!(!app.hits_fetch_button(32, 22));
        assert!(!app.hits_fetch_button(15, 23));
    }
}
