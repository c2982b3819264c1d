//! Application state and TUI event loop for the report analyzer.
//!
//! [`App`] owns the theme and drives the read-only summary screen. The
//! core pipeline has already finished by the time the event loop starts;
//! nothing re-runs while the screen is open.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use report_core::models::ReportSummary;

use crate::summary_view;
use crate::themes::Theme;

/// How long one draw-poll cycle waits for input.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Root application state for the analyzer TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
}

impl App {
    /// Construct a new application with the given theme name.
    pub fn new(theme_name: &str) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
        }
    }

    /// Show the static summary screen until the user asks to leave.
    ///
    /// The terminal is switched to the alternate screen for the duration of
    /// the loop and restored before returning, also on the error path.
    pub async fn run_summary(self, summary: ReportSummary, folder_empty: bool) -> io::Result<()> {
        let mut terminal = init_terminal()?;

        let result = self.event_loop(&mut terminal, &summary, folder_empty);

        restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        summary: &ReportSummary,
        folder_empty: bool,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| {
                summary_view::render_summary_view(
                    frame,
                    frame.area(),
                    summary,
                    folder_empty,
                    &self.theme,
                );
            })?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if is_exit_key(&key) {
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// `q`, `Q` or `Ctrl+C` closes the summary screen.
fn is_exit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
