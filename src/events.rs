use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::App;

/// Lines moved by PgUp/PgDn.
const PAGE: u16 = 10;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ignore release/repeat reports from terminals that send them
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Any key closes the error dialog, then the help overlay
    if app.error.is_some() {
        app.dismiss_error();
        return;
    }
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // Fetch now
        KeyCode::Char('f') | KeyCode::Char('r') | KeyCode::Enter => app.manual_fetch(),

        // Scrolling
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE),
        KeyCode::PageDown => app.scroll_down(PAGE),
        KeyCode::Home => app.scroll_top(),
        KeyCode::End => app.scroll_bottom(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        // Scroll wheel
        MouseEventKind::ScrollUp => app.scroll_up(1),
        MouseEventKind::ScrollDown => app.scroll_down(1),

        // Click on the fetch button
        MouseEventKind::Down(MouseButton::Left) => {
            if app.error.is_some() {
                app.dismiss_error();
            } else if app.hits_fetch_button(mouse.column, mouse.row) {
                app.manual_fetch();
            }
        }

        _ => {}
    }
}
