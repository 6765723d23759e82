//! Plain `label: value` listing.

use std::io::{self, Write};

use super::{field_rows, HEADING};
use crate::data::Snapshot;

/// One `label: value` line per catalog field.
pub fn rows(snapshot: &Snapshot) -> Vec<String> {
    field_rows(snapshot)
        .into_iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect()
}

/// Lines of the plain listing, heading included.
pub fn lines(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = vec![HEADING.to_string(), "=".repeat(30)];
    lines.extend(rows(snapshot));
    lines
}

pub fn render<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    for line in lines(snapshot) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
