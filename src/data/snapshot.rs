//! Readings and the per-cycle snapshot.

/// The value of a single extracted field.
///
/// Coercion to a number is attempted once at extraction; the textual
/// fallback is a first-class variant, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The text parsed as a finite float. `raw` is the text as it appeared.
    Numeric { raw: String, value: f64 },
    /// The text did not parse as a number (timestamps, `S1-S2`, band names).
    Text(String),
    /// The element was present but carried no text.
    Empty,
}

impl FieldValue {
    /// Classify raw element text.
    pub fn coerce(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return FieldValue::Empty;
        };

        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => FieldValue::Numeric {
                raw: raw.to_string(),
                value,
            },
            _ => FieldValue::Text(raw.to_string()),
        }
    }

    /// The element text, untouched.
    pub fn raw(&self) -> Option<&str> {
        match self {
            FieldValue::Numeric { raw, .. } => Some(raw),
            FieldValue::Text(raw) => Some(raw),
            FieldValue::Empty => None,
        }
    }

    pub fn numeric(&self) -> Option<f64> {
        match self {
            FieldValue::Numeric { value, .. } => Some(*value),
            _ => None,
        }
    }
}

/// One extracted field.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub key: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
}

impl Reading {
    pub fn raw_value(&self) -> Option<&str> {
        self.value.raw()
    }

    pub fn numeric_value(&self) -> Option<f64> {
        self.value.numeric()
    }

    /// Text shown by presenters: trimmed raw text, or `None` when empty.
    pub fn display_value(&self) -> Option<&str> {
        self.raw_value().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// All readings from one fetch, in catalog order.
///
/// Keys that never appeared in the document have no entry at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    readings: Vec<Reading>,
}

impl Snapshot {
    pub(crate) fn from_readings(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    pub fn get(&self, key: &str) -> Option<&Reading> {
        self.readings.iter().find(|r| r.key == key)
    }

    /// Numeric value for `key`, if present and numeric.
    pub fn numeric(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Reading::numeric_value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
