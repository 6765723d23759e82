//! Machine-readable report.

use std::io::{self, Write};

use serde_json::{json, Value};

use crate::data::{Assessment, FieldCatalog};

/// Build the JSON document for an assessment.
///
/// Catalog fields missing from the feed appear with `raw` and `numeric` null.
pub fn to_value(assessment: &Assessment, source: &str) -> Value {
    let fields: Vec<Value> = FieldCatalog::standard()
        .iter()
        .map(|field| {
            let reading = assessment.snapshot.get(field.key);
            json!({
                "key": field.key,
                "label": field.label,
                "raw": reading.and_then(|r| r.raw_value()),
                "numeric": reading.and_then(|r| r.numeric_value()),
            })
        })
        .collect();

    let conditions: Vec<Value> = assessment
        .conditions
        .iter()
        .map(|c| {
            json!({
                "metric": c.verdict.metric,
                "value": c.value,
                "tier": c.verdict.tier.label(),
                "description": c.verdict.description,
                "color": c.verdict.color.name(),
            })
        })
        .collect();

    json!({
        "source": source,
        "fields": fields,
        "conditions": conditions,
    })
}

pub fn render<W: Write>(out: &mut W, assessment: &Assessment, source: &str) -> io::Result<()> {
    let value = to_value(assessment, source);
    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)
}
