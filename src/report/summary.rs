//! Colorized terminal summary.
//!
//! An aligned field listing followed by a propagation summary with one
//! verdict line per classifiable metric, coloured by tier.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use super::{field_rows, HEADING};
use crate::data::{Assessment, SeverityColor};

/// Layout and colour options for the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryStyle {
    pub label_width: usize,
    pub value_width: usize,
    /// Emit ANSI colour codes.
    pub color: bool,
}

impl Default for SummaryStyle {
    fn default() -> Self {
        Self {
            label_width: 25,
            value_width: 10,
            color: true,
        }
    }
}

const NOISE_LEGEND: [(&str, SeverityColor); 3] = [
    ("S0-S2: Low Noise or Quiet environment.", SeverityColor::Green),
    ("S3-S5: Moderate Noise or Some interference.", SeverityColor::Yellow),
    ("S6-S9: High Noise or High interference.", SeverityColor::Red),
];

/// Terminal colour for a severity colour.
pub fn term_color(color: SeverityColor) -> Color {
    match color {
        SeverityColor::Blue => Color::Blue,
        SeverityColor::Green => Color::Green,
        SeverityColor::Yellow => Color::Yellow,
        SeverityColor::Orange => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        SeverityColor::Red => Color::Red,
        SeverityColor::Gray => Color::Grey,
    }
}

struct Painter {
    enabled: bool,
}

impl Painter {
    fn bold(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.bold().with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn colored(&self, text: &str, color: SeverityColor) -> String {
        if self.enabled {
            text.with(term_color(color)).to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn render<W: Write>(out: &mut W, assessment: &Assessment, style: SummaryStyle) -> io::Result<()> {
    let paint = Painter {
        enabled: style.color,
    };

    writeln!(out, "{}", paint.heading(HEADING, Color::Cyan))?;
    writeln!(out, "{}", "=".repeat(40))?;

    for (label, value) in field_rows(&assessment.snapshot) {
        let padded = format!("{:<width$}", label, width = style.label_width);
        writeln!(
            out,
            "{}: {:>width$}",
            paint.bold(&padded),
            value,
            width = style.value_width
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", paint.heading("Propagation Summary", Color::Blue))?;
    writeln!(out, "{}", "=".repeat(50))?;

    for (i, condition) in assessment.conditions.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let title = format!("{}:", condition.metric.summary_title());
        writeln!(out, "{} {}", paint.bold(&title), condition.value)?;
        let verdict = &condition.verdict;
        writeln!(
            out,
            "{}",
            paint.colored(&format!("... {}", verdict.description), verdict.color)
        )?;
    }

    if let Some(noise) = assessment
        .snapshot
        .get("signalnoise")
        .and_then(|r| r.display_value())
    {
        if !assessment.conditions.is_empty() {
            writeln!(out)?;
        }
        writeln!(
            out,
            "{} {}",
            paint.bold("Background Signal to Noise Level:"),
            noise
        )?;
        for (text, color) in NOISE_LEGEND {
            writeln!(out, "{}", paint.colored(&format!("... {}", text), color))?;
        }
    }

    Ok(())
}
