//! Dashboard view: field listing on the left, condition chart, legend and
//! fetch button on the right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{Assessment, Condition, Metric};
use crate::report::HEADING;

/// Chart rows, top to bottom.
const CHART_ORDER: [Metric; 4] = [
    Metric::SunspotCount,
    Metric::SolarFlux,
    Metric::AIndex,
    Metric::KIndex,
];

const BUTTON_LABEL: &str = "Fetch Solar Data";

/// Render the dashboard into `area`, recording the fetch button location.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_listing(frame, app, columns[0]);

    let right = Layout::vertical([
        Constraint::Min(6),    // Chart
        Constraint::Length(6), // Legend
        Constraint::Length(3), // Button
    ])
    .split(columns[1]);

    render_chart(frame, app, right[0]);
    render_legend(frame, app, right[1]);
    render_button(frame, app, right[2]);
}

fn panel<'a>(app: &App, title: &'a str) -> Block<'a> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), app.theme.header))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
}

fn render_listing(frame: &mut Frame, app: &App, area: Rect) {
    let block = panel(app, HEADING);

    let lines: Vec<Line> = if app.assessment.is_some() {
        app.text_lines().into_iter().map(Line::from).collect()
    } else {
        vec![Line::styled(
            "Waiting for data...",
            Style::default().add_modifier(Modifier::DIM),
        )]
    };

    let paragraph = Paragraph::new(lines).block(block).scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Conditions to plot, in chart order.
fn charted(assessment: &Assessment) -> Vec<&Condition> {
    CHART_ORDER
        .iter()
        .filter_map(|metric| assessment.condition(*metric))
        .collect()
}

fn bars<'a>(app: &App, assessment: &Assessment) -> Vec<Bar<'a>> {
    charted(assessment)
        .into_iter()
        .map(|c| {
            let style = app.theme.severity_style(c.verdict.color);
            Bar::default()
                .value(c.value.max(0.0).round() as u64)
                .label(Line::from(c.metric.label()))
                .text_value(c.value.to_string())
                .style(style)
                .value_style(style.add_modifier(Modifier::REVERSED))
        })
        .collect()
}

fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = panel(app, "Solar Activity Conditions");

    let data = match &app.assessment {
        Some(assessment) => bars(app, assessment),
        None => Vec::new(),
    };

    if data.is_empty() {
        let paragraph = Paragraph::new("No numeric data to plot")
            .style(Style::default().add_modifier(Modifier::DIM))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&data));

    frame.render_widget(chart, area);
}

fn render_legend(frame: &mut Frame, app: &App, area: Rect) {
    let block = panel(app, "Legend");

    let lines: Vec<Line> = app
        .assessment
        .iter()
        .flat_map(|a| a.conditions.iter())
        .map(|c| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", c.metric.label()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    c.verdict.description,
                    app.theme.severity_style(c.verdict.color),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_button(frame: &mut Frame, app: &mut App, area: Rect) {
    let width = (BUTTON_LABEL.len() as u16 + 4).min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let button = Rect::new(x, area.y, width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));
    let paragraph = Paragraph::new(Span::styled(BUTTON_LABEL, app.theme.button))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, button);
    app.fetch_button = Some(button);
}
