//! Common UI components shared across the dashboard.
//!
//! This module contains the header bar, status bar, and the help and error
//! overlays.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{format_duration, Metric};

/// Minimum terminal size for usable display.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 12;

/// Render the header bar with the headline numbers.
///
/// Displays: worst-tier indicator, then SFI, SSN, A and K values.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = Span::styled(" SPACE WEATHER ", Style::default().add_modifier(Modifier::BOLD));

    let Some(ref assessment) = app.assessment else {
        let line = Line::from(vec![title, Span::raw("| Loading...")]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let dot_style = match assessment.worst_tier() {
        Some(tier) => app.theme.severity_style(tier.color()),
        None => Style::default().add_modifier(Modifier::DIM),
    };

    let mut spans = vec![Span::styled(" ● ", dot_style), title];
    for (short, metric) in [
        ("SFI", Metric::SolarFlux),
        ("SSN", Metric::SunspotCount),
        ("A", Metric::AIndex),
        ("K", Metric::KIndex),
    ] {
        spans.push(Span::raw("│ "));
        match assessment.condition(metric) {
            Some(c) => {
                spans.push(Span::raw(format!("{}:", short)));
                spans.push(Span::styled(
                    format!("{} ", c.value),
                    app.theme.severity_style(c.verdict.color),
                ));
            }
            None => spans.push(Span::styled(
                format!("{}:- ", short),
                Style::default().add_modifier(Modifier::DIM),
            )),
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the status bar at the bottom.
///
/// Shows: time since last update, time to the next scheduled refresh,
/// available controls. Temporary status messages take precedence.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph = Paragraph::new(format!(" {}", msg))
            .style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let now = Instant::now();
    let next = match app.schedule.remaining(now) {
        Some(d) => format!("next refresh in {}", format_duration(d)),
        None => "refresh stopped".to_string(),
    };

    let status = if let Some(ref err) = app.error {
        format!(" Error: {} | {} | f:retry q:quit", err, next)
    } else if let Some(ref assessment) = app.assessment {
        format!(
            " Updated {} ago | {} | f:fetch ?:help q:quit",
            format_duration(now.saturating_duration_since(assessment.fetched_at)),
            next,
        )
    } else {
        " Loading... | q:quit".to_string()
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Centered rect of at most `width` x `height` inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Render the help overlay with keyboard shortcuts.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Listing",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ↑/↓ j/k     Scroll"),
        Line::from("  PgUp/PgDn   Scroll 10 lines"),
        Line::from("  Home/End    Jump to top/bottom"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  f Enter     Fetch solar data now"),
        Line::from("  ?           Toggle this help"),
        Line::from("  q Esc       Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);
    let help_area = centered(area, 40, 17);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

/// Render the error dialog for the last failed cycle.
pub fn render_error(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref err) = app.error else {
        return;
    };

    let text = vec![
        Line::from(""),
        Line::from(err.as_str()),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.critical));

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let dialog = centered(area, 50, 8);

    frame.render_widget(Clear, dialog);
    frame.render_widget(paragraph, dialog);
}

/// Render the notice shown when the terminal is below the minimum size.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );
    let paragraph = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    let top = area.y + (area.height / 2).saturating_sub(2);
    let centered = Rect::new(area.x, top, area.width, 5.min(area.height));
    frame.render_widget(paragraph, centered);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::source::{FetchError, StaticSource};
    use crate::ui::Theme;

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(app: &App, f: impl Fn(&mut Frame, &App, Rect)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                f(frame, app, area)
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn app(source: StaticSource) -> App {
        App::new(Box::new(source), Duration::from_secs(7_200), Theme::dark())
    }

    #[test]
    fn test_header_loading() {
        let app = app(StaticSource::new("<solar/>"));
        let text = draw(&app, render_header);
        assert!(text.contains("SPACE WEATHER"));
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn test_header_values() {
        let mut app = app(StaticSource::new(
            "<solar><solarflux>120.5</solarflux><kindex>2</kindex></solar>",
        ));
        app.refresh();
        let text = draw(&app, render_header);
        assert!(text.contains("SFI:120.5"));
        assert!(text.contains("K:2"));
        assert!(text.contains("SSN:-"));
    }

    #[test]
    fn test_status_bar_shows_error() {
        let mut app = app(StaticSource::failing(FetchError::Status(500)));
        app.tick(Instant::now());
        let text = draw(&app, render_status_bar);
        assert!(text.contains("Error: Failed to fetch data. Status code: 500"));
        assert!(text.contains("next refresh in"));
    }

    #[test]
    fn test_error_dialog() {
        let mut app = app(StaticSource::failing(FetchError::Status(404)));
        app.refresh();
        let text = draw(&app, render_error);
        assert!(text.contains("Error"));
        assert!(text.contains("Status code: 404"));
    }

    #[test]
    fn test_too_small_notice() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_too_small(frame, area)
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Terminal too small: 40x10"));
    }
}
